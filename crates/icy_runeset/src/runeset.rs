//! The 256 glyph font container.
//!
//! All editing goes through [`Runeset::read_at`] and [`Runeset::set_at`]. The
//! convenience operations (toggle, clear, invert, reverse, copy) are
//! compositions of those two with a glyph transform.

use crate::{codec, preview, Glyph, Result, RunesetError, GLYPH_SIZE};

/// Number of glyphs in a runeset.
pub const GLYPH_COUNT: usize = 256;

/// Glyph columns in the charset overview and the import image grid.
pub const CHARSET_COLUMNS: usize = 32;

/// Glyph rows in the charset overview and the import image grid.
pub const CHARSET_ROWS: usize = GLYPH_COUNT / CHARSET_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Runeset {
    glyphs: [Glyph; GLYPH_COUNT],
}

impl Default for Runeset {
    fn default() -> Self {
        Self::new()
    }
}

impl Runeset {
    /// Create a runeset with all glyphs blank.
    pub const fn new() -> Self {
        Self {
            glyphs: [Glyph::BLANK; GLYPH_COUNT],
        }
    }

    pub const fn from_glyphs(glyphs: [Glyph; GLYPH_COUNT]) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[Glyph; GLYPH_COUNT] {
        &self.glyphs
    }

    /// Decode from the 2048 byte file layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes)
    }

    /// Encode to the 2048 byte file layout.
    pub fn to_bytes(&self) -> [u8; codec::RUNESET_SIZE] {
        codec::encode(self)
    }

    fn slot(index: i32) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < GLYPH_COUNT)
            .ok_or(RunesetError::Index { index })
    }

    pub fn read_at(&self, index: i32) -> Result<Glyph> {
        Ok(self.glyphs[Self::slot(index)?])
    }

    /// Replace the glyph at `index`. On error the runeset is left untouched.
    pub fn set_at(&mut self, glyph: Glyph, index: i32) -> Result<()> {
        let slot = Self::slot(index)?;
        self.glyphs[slot] = glyph;
        Ok(())
    }

    /// Flip a single pixel of the glyph at `index`.
    pub fn toggle_pixel(&mut self, index: i32, x: i32, y: i32) -> Result<()> {
        let glyph = self.read_at(index)?;
        let size = GLYPH_SIZE as i32;
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return Err(RunesetError::PixelOutOfRange { x, y });
        }
        self.set_at(glyph.with_pixel_toggled(x as usize, y as usize), index)
    }

    pub fn clear_glyph(&mut self, index: i32) -> Result<()> {
        self.set_at(Glyph::BLANK, index)
    }

    pub fn invert_glyph(&mut self, index: i32) -> Result<()> {
        let glyph = self.read_at(index)?;
        self.set_at(glyph.invert(), index)
    }

    /// Mirror the glyph at `index` horizontally.
    pub fn reverse_glyph(&mut self, index: i32) -> Result<()> {
        let glyph = self.read_at(index)?;
        self.set_at(glyph.reverse(), index)
    }

    /// Copy the glyph at `from` over the glyph at `to`.
    ///
    /// Both indices are validated before anything is written.
    pub fn copy_glyph(&mut self, from: i32, to: i32) -> Result<()> {
        let glyph = self.read_at(from)?;
        self.set_at(glyph, to)
    }

    /// Quadrant block preview of the glyph at `index`.
    pub fn preview_at(&self, index: i32) -> Result<String> {
        Ok(preview::preview(&self.read_at(index)?))
    }

    /// Full resolution pixel grid of the glyph at `index`.
    pub fn bit_grid_at(&self, index: i32) -> Result<preview::BitGrid> {
        Ok(preview::to_bit_grid(&self.read_at(index)?))
    }
}
