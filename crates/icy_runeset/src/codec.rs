//! Binary runeset layout.
//!
//! 256 glyph records of 8 row bytes each, in index order. No header, padding,
//! magic number or checksum.

use crate::{Glyph, Result, Runeset, RunesetError, GLYPH_COUNT, GLYPH_SIZE};

/// Size of an encoded runeset in bytes.
pub const RUNESET_SIZE: usize = GLYPH_COUNT * GLYPH_SIZE;

pub fn encode(runeset: &Runeset) -> [u8; RUNESET_SIZE] {
    let mut bytes = [0u8; RUNESET_SIZE];
    for (record, glyph) in bytes.chunks_exact_mut(GLYPH_SIZE).zip(runeset.glyphs()) {
        record.copy_from_slice(glyph.rows());
    }
    bytes
}

pub fn decode(bytes: &[u8]) -> Result<Runeset> {
    if bytes.len() != RUNESET_SIZE {
        return Err(RunesetError::bytes_length(bytes.len()));
    }

    let mut glyphs = [Glyph::BLANK; GLYPH_COUNT];
    for (glyph, record) in glyphs.iter_mut().zip(bytes.chunks_exact(GLYPH_SIZE)) {
        let mut rows = [0u8; GLYPH_SIZE];
        rows.copy_from_slice(record);
        *glyph = Glyph::new(rows);
    }
    Ok(Runeset::from_glyphs(glyphs))
}
