//! Brightness ramp: glyphs ordered from darkest to brightest.

use crate::error::{GeometryError, Result};

/// Printable ASCII ordered by ink coverage, darkest first.
pub const DEFAULT_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl Ramp {
    /// Build from glyphs already ordered darkest to brightest.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.len() < 2 {
            return Err(GeometryError::RampTooShort { len: glyphs.len() });
        }
        Ok(Self { glyphs })
    }

    /// Build from measured glyph coverage (e.g. lit pixel counts from a font
    /// rasterizer). Glyphs are sorted by coverage, ties keep input order, and
    /// a blank space is placed first as the darkest entry.
    pub fn from_coverage(samples: impl IntoIterator<Item = (char, u32)>) -> Result<Self> {
        let mut samples: Vec<(char, u32)> = samples
            .into_iter()
            .filter(|(ch, _)| !ch.is_whitespace())
            .collect();
        samples.sort_by_key(|&(_, coverage)| coverage);
        Self::new(std::iter::once(' ').chain(samples.into_iter().map(|(ch, _)| ch)))
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Ramp index for a light value. Values are clamped to `[0, 1]`; NaN maps
    /// to the darkest glyph.
    pub fn index_for(&self, light: f64) -> usize {
        let light = if light.is_nan() {
            0.0
        } else {
            light.clamp(0.0, 1.0)
        };
        let last = self.glyphs.len() - 1;
        ((light * last as f64).floor() as usize).min(last)
    }

    pub fn glyph_for(&self, light: f64) -> char {
        self.glyphs[self.index_for(light)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_ramps() {
        assert_eq!(Ramp::new(['#']), Err(GeometryError::RampTooShort { len: 1 }));
        assert!(Ramp::new([' ', '#']).is_ok());
    }

    #[test]
    fn lookup_clamps_out_of_range_values() {
        let ramp = Ramp::new(" .:#".chars()).unwrap();
        assert_eq!(ramp.glyph_for(-3.0), ' ');
        assert_eq!(ramp.glyph_for(0.0), ' ');
        assert_eq!(ramp.glyph_for(0.5), '.');
        assert_eq!(ramp.glyph_for(0.99), ':');
        assert_eq!(ramp.glyph_for(1.0), '#');
        assert_eq!(ramp.glyph_for(42.0), '#');
        assert_eq!(ramp.glyph_for(f64::INFINITY), '#');
        assert_eq!(ramp.glyph_for(f64::NAN), ' ');
    }

    #[test]
    fn coverage_sorts_and_prepends_space() {
        let ramp = Ramp::from_coverage([('#', 90), ('.', 5), (' ', 0), ('+', 40)]).unwrap();
        assert_eq!(ramp.glyphs(), &[' ', '.', '+', '#']);
    }

    #[test]
    fn default_ramp_starts_blank() {
        let ramp = Ramp::default();
        assert_eq!(ramp.glyphs()[0], ' ');
        assert!(ramp.len() > 60);
    }
}
