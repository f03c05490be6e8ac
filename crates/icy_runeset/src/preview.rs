//! Glyph renderings for display.
//!
//! - [`to_bit_grid`] expands a glyph into an 8x8 boolean grid for editing.
//! - [`preview`] compresses a glyph into 4x4 Unicode quadrant block characters,
//!   each character summarizing a 2x2 pixel cell. The preview is lossy and only
//!   meant for the charset overview.

use crate::{Glyph, GLYPH_SIZE};

/// Full resolution pixel grid, indexed `[row][column]`.
pub type BitGrid = [[bool; GLYPH_SIZE]; GLYPH_SIZE];

/// Characters per preview line, and number of preview lines.
pub const PREVIEW_SIZE: usize = GLYPH_SIZE / 2;

/// Quadrant blocks indexed by TL + 2*TR + 4*BL + 8*BR.
pub const QUADRANT_BLOCKS: [char; 16] = [' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█'];

pub fn to_bit_grid(glyph: &Glyph) -> BitGrid {
    let mut grid = [[false; GLYPH_SIZE]; GLYPH_SIZE];
    for (row, &byte) in grid.iter_mut().zip(glyph.rows()) {
        for (j, pixel) in row.iter_mut().enumerate() {
            *pixel = (byte >> j) & 1 == 1;
        }
    }
    grid
}

/// Render the 4x4 quadrant block preview, lines joined by `\n`.
pub fn preview(glyph: &Glyph) -> String {
    let grid = to_bit_grid(glyph);
    let mut result = String::with_capacity(PREVIEW_SIZE * (PREVIEW_SIZE * 3 + 1));

    for i in 0..PREVIEW_SIZE {
        if i > 0 {
            result.push('\n');
        }
        for j in 0..PREVIEW_SIZE {
            result.push(QUADRANT_BLOCKS[quadrant_index(&grid, i, j)]);
        }
    }
    result
}

/// Lookup index for the 2x2 cell at preview position (i, j).
fn quadrant_index(grid: &BitGrid, i: usize, j: usize) -> usize {
    let mut n = 0;
    for dy in 0..2 {
        for dx in 0..2 {
            if grid[i * 2 + dy][j * 2 + dx] {
                n |= 1 << (dy * 2 + dx);
            }
        }
    }
    n
}
