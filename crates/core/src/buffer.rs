//! Character buffer with per-frame change tracking.
//!
//! Cells hold an optional glyph (`None` renders as blank). The buffer keeps
//! the previous frame's cells so it can report which coordinates changed,
//! letting the terminal flush redraw only those.

/// `(x, y)` cell coordinate, column first.
pub type Coord = (u16, u16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBuffer {
    width: u16,
    height: u16,
    cells: Vec<Option<char>>,
    prev: Vec<Option<char>>,
    /// Cells written since `begin_frame`, in write order, no duplicates.
    touched: Vec<Coord>,
    /// Cells written during the previous frame.
    prev_touched: Vec<Coord>,
    marks: Vec<bool>,
}

impl CharBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
            prev: vec![None; len],
            touched: Vec::new(),
            prev_touched: Vec::new(),
            marks: vec![false; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer, dropping contents and change history.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        for v in [&mut self.cells, &mut self.prev] {
            v.clear();
            v.resize(len, None);
        }
        self.marks.clear();
        self.marks.resize(len, false);
        self.touched.clear();
        self.prev_touched.clear();
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).and_then(|i| self.cells[i])
    }

    /// Write a glyph. Returns false (and writes nothing) when off-buffer.
    pub fn paint(&mut self, x: u16, y: u16, ch: char) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        self.cells[i] = Some(ch);
        if !self.marks[i] {
            self.marks[i] = true;
            self.touched.push((x, y));
        }
        true
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.paint(cx, y, ch);
            cx += 1;
        }
    }

    /// Start a new frame: the current cells become the reference that
    /// [`CharBuffer::dirty`] compares against, and the buffer is blanked.
    pub fn begin_frame(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.prev);
        self.cells.fill(None);

        for &(x, y) in &self.touched {
            let i = (y as usize) * (self.width as usize) + (x as usize);
            self.marks[i] = false;
        }
        std::mem::swap(&mut self.touched, &mut self.prev_touched);
        self.touched.clear();
    }

    /// Cells written since the last `begin_frame`.
    pub fn written(&self) -> &[Coord] {
        &self.touched
    }

    /// Cells whose glyph differs from the previous frame, in row-major order.
    pub fn dirty(&self) -> Vec<Coord> {
        let mut out = Vec::new();
        self.dirty_into(&mut out);
        out
    }

    /// Allocation-reusing form of [`CharBuffer::dirty`].
    pub fn dirty_into(&self, out: &mut Vec<Coord>) {
        out.clear();
        let w = self.width as usize;
        let changed = |&(x, y): &Coord| {
            let i = (y as usize) * w + (x as usize);
            self.cells[i] != self.prev[i]
        };

        out.extend(self.touched.iter().copied().filter(|c| changed(c)));
        out.extend(self.prev_touched.iter().copied().filter(|&(x, y)| {
            let i = (y as usize) * w + (x as usize);
            !self.marks[i] && changed(&(x, y))
        }));
        out.sort_unstable_by_key(|&(x, y)| (y, x));
    }

    /// Render the buffer as text lines (blank for empty cells).
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|c| c.unwrap_or(' ')).collect())
            .collect()
    }
}
