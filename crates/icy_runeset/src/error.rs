//! Error types for runeset operations

use std::path::PathBuf;
use thiserror::Error;

use crate::{GLYPH_COUNT, RUNESET_SIZE};

pub type Result<T> = std::result::Result<T, RunesetError>;

#[derive(Debug, Error)]
pub enum RunesetError {
    #[error("runeset index {index} out of range (0..{count})", count = GLYPH_COUNT)]
    Index { index: i32 },

    #[error("pixel ({x}, {y}) out of range, glyphs are 8x8")]
    PixelOutOfRange { x: i32, y: i32 },

    #[error("the byte slice is the wrong length: {actual} bytes (should be {expected})")]
    BytesLength { expected: usize, actual: usize },

    #[error("unable to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file not found: '{path}'")]
    NotFound { path: PathBuf },

    #[error("image must be 256x64 pixels, was {width}x{height}")]
    ImageDimensions { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl RunesetError {
    pub(crate) fn bytes_length(actual: usize) -> Self {
        Self::BytesLength {
            expected: RUNESET_SIZE,
            actual,
        }
    }

    /// True for errors that are only produced after the file was found on disk.
    ///
    /// Callers use this to tell "create a new runeset" apart from
    /// "leave the existing (possibly corrupt) file alone".
    pub fn file_exists(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::BytesLength { .. })
    }
}
