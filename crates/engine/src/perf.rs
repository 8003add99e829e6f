//! Per-frame performance log, one JSON object per line.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub elapsed_ms: f64,
    pub render_ms: f64,
    pub fps: f64,
    pub faces_drawn: usize,
    pub cells_written: usize,
    pub dirty_cells: usize,
}

/// Appends [`FrameRecord`]s to a writer. The first write error disables the
/// log; rendering is never interrupted by it.
pub struct PerfLog {
    out: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl PerfLog {
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening perf log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer(w: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(w)),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, rec: &FrameRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for PerfLog {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn record(frame: u64) -> FrameRecord {
        FrameRecord {
            frame,
            elapsed_ms: frame as f64 * 16.0,
            render_ms: 3.5,
            fps: 60.0,
            faces_drawn: 400,
            cells_written: 1200,
            dirty_cells: 80,
        }
    }

    #[test]
    fn writes_one_json_line_per_frame() {
        let path = std::env::temp_dir().join(format!("term3d-perf-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let mut log = PerfLog::open(&path).unwrap();
            assert!(log.is_enabled());
            log.record(&record(1));
            log.record(&record(2));
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: FrameRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, record(1));
        let raw: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(raw["frame"], 2);
        assert_eq!(raw["dirty_cells"], 80);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_disables_log() {
        let mut log = PerfLog::from_writer(Broken);
        log.record(&record(1));
        assert!(!log.is_enabled());
        log.record(&record(2));
    }

    #[test]
    fn disabled_log_ignores_records() {
        let mut log = PerfLog::disabled();
        log.record(&record(1));
        log.flush();
        assert!(!log.is_enabled());
    }
}
