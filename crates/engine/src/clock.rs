use std::time::{Duration, Instant};

/// Frame pacing and FPS measurement.
///
/// `tick` is called once per frame; the measured FPS is the reciprocal of
/// the time since the previous tick, as shown by the on-screen counter.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    started: Instant,
    last: Instant,
    frame: u64,
    fps: f64,
}

impl FrameClock {
    /// A clock targeting `target_fps`. Zero disables pacing.
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        let frame_duration = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            frame_duration,
            started: now,
            last: now,
            frame: 0,
            fps: 0.0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// FPS measured at the last tick.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.last.duration_since(self.started)
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Advance one frame and return the time since the previous one.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.frame += 1;
        let secs = dt.as_secs_f64();
        if secs > 0.0 {
            self.fps = 1.0 / secs;
        }
        dt
    }

    /// How long to wait for input before the next frame is due.
    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    pub fn timeout_at(&self, now: Instant) -> Duration {
        self.frame_duration
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }
}
