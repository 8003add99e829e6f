//! TerminalRenderer: flushes a character buffer to a real terminal.
//!
//! A frame is either a full redraw or a dirty-only redraw that moves the
//! cursor to each run of changed cells. Commands are encoded into a byte
//! buffer first and written to stdout in one go.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{CharBuffer, Coord};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    needs_full: bool,
    dirty: Vec<Coord>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            needs_full: true,
            dirty: Vec::new(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.needs_full = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// Flush `cb` and return the number of cells sent.
    ///
    /// With `dirty_only` the renderer sends just the cells that changed
    /// since the buffer's previous frame; the first frame after `enter` or
    /// `invalidate` is always a full redraw.
    pub fn draw(&mut self, cb: &CharBuffer, dirty_only: bool) -> Result<usize> {
        self.buf.clear();
        let sent = if self.needs_full || !dirty_only {
            encode_full_into(cb, &mut self.buf)?;
            self.needs_full = false;
            cb.width() as usize * cb.height() as usize
        } else {
            cb.dirty_into(&mut self.dirty);
            encode_dirty_into(cb, &self.dirty, &mut self.buf)?;
            self.dirty.len()
        };
        self.flush_buf()?;
        Ok(sent)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(cb: &CharBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..cb.height() {
        for x in 0..cb.width() {
            out.queue(Print(cb.get(x, y).unwrap_or(' ')))?;
        }
        if y + 1 < cb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode the given dirty cells (row-major, as produced by
/// [`CharBuffer::dirty_into`]) into `out`.
pub fn encode_dirty_into(cb: &CharBuffer, dirty: &[Coord], out: &mut Vec<u8>) -> Result<()> {
    for_each_dirty_run(dirty, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(cb.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

/// Coalesce horizontally adjacent dirty cells into `(x, y, len)` runs so
/// each run costs one cursor move.
fn for_each_dirty_run(
    dirty: &[Coord],
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let mut cells = dirty.iter().copied();
    let Some((mut start, mut y)) = cells.next() else {
        return Ok(());
    };
    let mut len: u16 = 1;

    for (x, row) in cells {
        if row == y && x == start + len {
            len += 1;
            continue;
        }
        f(start, y, len)?;
        start = x;
        y = row;
        len = 1;
    }
    f(start, y, len)
}
