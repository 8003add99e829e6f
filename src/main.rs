//! Terminal 3D renderer (default binary).
//!
//! Spins a built-in mesh in the terminal. Configuration comes from `TERM3D_*`
//! environment variables; see `term3d::engine::config`.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use term3d::core::CharBuffer;
use term3d::engine::{FrameClock, FrameRecord, PerfLog, RenderConfig, Scene};
use term3d::input::{handle_key_event, should_quit};
use term3d::term::{draw_fps, TerminalRenderer};

fn main() -> Result<()> {
    let config = RenderConfig::from_env();
    let mut scene = Scene::new(&config)?;
    let mut perf = match config.perf_log.as_deref() {
        Some(path) => PerfLog::open(path)?,
        None => PerfLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut scene, &mut perf, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    perf.flush();
    result
}

fn run(
    term: &mut TerminalRenderer,
    scene: &mut Scene,
    perf: &mut PerfLog,
    config: &RenderConfig,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut buf = CharBuffer::new(w, h);
    scene.set_viewport(w, h);

    let mut clock = FrameClock::new(config.target_fps);

    loop {
        let dt = clock.tick();
        scene.update(dt);

        // Render.
        let started = Instant::now();
        let stats = scene.render(&mut buf);
        if config.fps_counter {
            draw_fps(&mut buf, clock.fps());
        }
        let sent = term.draw(&buf, config.dirty_redraw)?;

        perf.record(&FrameRecord {
            frame: clock.frame(),
            elapsed_ms: clock.elapsed().as_secs_f64() * 1000.0,
            render_ms: started.elapsed().as_secs_f64() * 1000.0,
            fps: clock.fps(),
            faces_drawn: stats.faces_drawn,
            cells_written: stats.cells_written,
            dirty_cells: sent,
        });

        // Input with timeout until next frame.
        if event::poll(clock.timeout())? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if !config.user_control {
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        scene.apply(action);
                    }
                }
                Event::Resize(w, h) => {
                    buf.resize(w, h);
                    scene.set_viewport(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }
    }
}
