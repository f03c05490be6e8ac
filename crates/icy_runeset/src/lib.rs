//! Model layer for 8x8 bitmap runesets.
//!
//! A runeset is a font of 256 glyphs, each glyph 8x8 pixels stored as 8 row
//! bytes. Runesets are stored as flat 2048 byte files without any header.
//!
//! - [`Glyph`] - a single glyph value and its transforms (invert, reverse)
//! - [`Runeset`] - the 256 glyph container with indexed read/write
//! - [`codec`] - the binary file layout
//! - [`preview`] - bit grid and quadrant block renderings
//! - [`import`] - raster image import/export
//! - [`file`] - loading and saving runeset files

pub mod codec;
mod error;
pub mod file;
mod glyph;
pub mod import;
pub mod preview;
mod runeset;

pub use codec::{decode, encode, RUNESET_SIZE};
pub use error::{Result, RunesetError};
pub use file::{load, load_or_new, save};
pub use glyph::{Glyph, GLYPH_SIZE};
pub use import::{export_image, import_image, runeset_from_image, runeset_to_image, IMAGE_HEIGHT, IMAGE_WIDTH};
pub use preview::{preview, to_bit_grid, BitGrid};
pub use runeset::{Runeset, CHARSET_COLUMNS, CHARSET_ROWS, GLYPH_COUNT};
