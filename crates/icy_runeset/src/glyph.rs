//! 8x8 monochrome glyph stored as packed row bytes.
//!
//! Each row is a single byte with LSB-first bit ordering:
//! - Bit 0 = column 0
//! - Bit 7 = column 7
//!
//! Glyphs are plain values. Transforms return a new glyph, storing the result
//! back into a runeset is up to the caller.

use std::fmt;

/// Width and height of a glyph in pixels.
pub const GLYPH_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    rows: [u8; GLYPH_SIZE],
}

impl Glyph {
    /// A glyph with every pixel off
    pub const BLANK: Self = Self { rows: [0; GLYPH_SIZE] };

    /// A glyph with every pixel on
    pub const FULL: Self = Self { rows: [0xFF; GLYPH_SIZE] };

    #[inline]
    pub const fn new(rows: [u8; GLYPH_SIZE]) -> Self {
        Self { rows }
    }

    #[inline]
    pub const fn rows(&self) -> &[u8; GLYPH_SIZE] {
        &self.rows
    }

    /// Get a pixel value.
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x >= GLYPH_SIZE || y >= GLYPH_SIZE {
            return false;
        }
        (self.rows[y] >> x) & 1 == 1
    }

    /// Returns a copy of this glyph with the pixel at (x, y) flipped.
    ///
    /// Out of bounds coordinates return the glyph unchanged.
    #[must_use]
    pub fn with_pixel_toggled(mut self, x: usize, y: usize) -> Self {
        if x < GLYPH_SIZE && y < GLYPH_SIZE {
            self.rows[y] ^= 1 << x;
        }
        self
    }

    /// Check if the glyph is empty (all pixels off).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&b| b == 0)
    }

    /// Complement every pixel.
    #[must_use]
    pub fn invert(self) -> Self {
        Self { rows: self.rows.map(|row| !row) }
    }

    /// Mirror horizontally by reversing the bit order of every row.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self {
            rows: self.rows.map(u8::reverse_bits),
        }
    }
}

impl From<[u8; GLYPH_SIZE]> for Glyph {
    fn from(rows: [u8; GLYPH_SIZE]) -> Self {
        Self::new(rows)
    }
}

impl From<Glyph> for [u8; GLYPH_SIZE] {
    fn from(glyph: Glyph) -> Self {
        glyph.rows
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{row:02X}")?;
        }
        Ok(())
    }
}
