//! Raster image import and export.
//!
//! The image is a 256x64 pixel sheet of 32x8 cells, each cell one glyph in
//! row-major order (glyph index = row * 32 + column). Only pure black pixels
//! (R = G = B = 0) count as set; alpha is ignored.

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::{Glyph, Result, Runeset, RunesetError, CHARSET_COLUMNS, CHARSET_ROWS, GLYPH_COUNT, GLYPH_SIZE};

pub const IMAGE_WIDTH: u32 = (CHARSET_COLUMNS * GLYPH_SIZE) as u32;
pub const IMAGE_HEIGHT: u32 = (CHARSET_ROWS * GLYPH_SIZE) as u32;

const SET_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CLEAR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Load an image file and rasterize it into a new runeset.
///
/// The format is guessed from the file contents / extension, any format the
/// `image` crate was built with is accepted.
pub fn import_image(path: impl AsRef<Path>) -> Result<Runeset> {
    let path = path.as_ref();
    if !path.try_exists()? {
        return Err(RunesetError::NotFound { path: path.to_path_buf() });
    }
    let img = image::open(path)?;
    let runeset = runeset_from_image(&img)?;
    log::debug!("imported runeset from {}", path.display());
    Ok(runeset)
}

pub fn runeset_from_image(img: &DynamicImage) -> Result<Runeset> {
    if img.width() != IMAGE_WIDTH || img.height() != IMAGE_HEIGHT {
        return Err(RunesetError::ImageDimensions {
            width: img.width(),
            height: img.height(),
        });
    }

    // f32 keeps every 8 and 16 bit channel value distinct from zero
    let rgba = img.to_rgba32f();
    let mut glyphs = [Glyph::BLANK; GLYPH_COUNT];

    for (index, glyph) in glyphs.iter_mut().enumerate() {
        let (cell_x, cell_y) = cell_origin(index);
        let mut rows = [0u8; GLYPH_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for x in 0..GLYPH_SIZE {
                let Rgba([r, g, b, _]) = *rgba.get_pixel(cell_x + x as u32, cell_y + y as u32);
                if r == 0.0 && g == 0.0 && b == 0.0 {
                    *row |= 1 << x;
                }
            }
        }
        *glyph = Glyph::new(rows);
    }

    Ok(Runeset::from_glyphs(glyphs))
}

/// Render the runeset as a 256x64 sheet, set pixels black, the rest white.
pub fn runeset_to_image(runeset: &Runeset) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, CLEAR_COLOR);
    for (index, glyph) in runeset.glyphs().iter().enumerate() {
        let (cell_x, cell_y) = cell_origin(index);
        for y in 0..GLYPH_SIZE {
            for x in 0..GLYPH_SIZE {
                if glyph.get_pixel(x, y) {
                    img.put_pixel(cell_x + x as u32, cell_y + y as u32, SET_COLOR);
                }
            }
        }
    }
    img
}

/// Write the runeset as an image, the format is taken from the file extension.
pub fn export_image(runeset: &Runeset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    runeset_to_image(runeset).save(path)?;
    log::debug!("exported runeset to {}", path.display());
    Ok(())
}

/// Top left pixel of the cell for glyph `index`.
fn cell_origin(index: usize) -> (u32, u32) {
    let column = index % CHARSET_COLUMNS;
    let row = index / CHARSET_COLUMNS;
    ((column * GLYPH_SIZE) as u32, (row * GLYPH_SIZE) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_sheet() -> RgbaImage {
        RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, CLEAR_COLOR)
    }

    #[test]
    fn test_cell_origin() {
        assert_eq!(cell_origin(0), (0, 0));
        assert_eq!(cell_origin(31), (248, 0));
        assert_eq!(cell_origin(32), (0, 8));
        assert_eq!(cell_origin(255), (248, 56));
    }

    #[test]
    fn test_single_black_pixel() {
        let mut img = white_sheet();
        img.put_pixel(3, 2, SET_COLOR);

        let runeset = runeset_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        let glyph = runeset.read_at(0).unwrap();
        assert_eq!(glyph.rows(), &[0, 0, 0x08, 0, 0, 0, 0, 0]);
        assert!(runeset.glyphs()[1..].iter().all(Glyph::is_empty));
    }

    #[test]
    fn test_cell_mapping_is_row_major() {
        let mut img = white_sheet();
        // glyph 33 = cell row 1, column 1, its pixel (7, 0)
        img.put_pixel(8 + 7, 8, SET_COLOR);

        let runeset = runeset_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(runeset.read_at(33).unwrap().rows()[0], 0x80);
        assert_eq!(runeset.glyphs().iter().filter(|g| !g.is_empty()).count(), 1);
    }

    #[test]
    fn test_only_pure_black_is_set() {
        let mut img = white_sheet();
        img.put_pixel(0, 0, Rgba([1, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 1, 255]));
        img.put_pixel(2, 0, Rgba([128, 128, 128, 255]));
        img.put_pixel(3, 0, Rgba([0, 0, 0, 0]));

        let runeset = runeset_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(runeset.read_at(0).unwrap().rows()[0], 0x08);
    }

    #[test]
    fn test_deep_color_is_not_narrowed() {
        let mut img = image::RgbImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, image::Rgb([255, 255, 255]));
        img.put_pixel(1, 0, image::Rgb([0, 0, 0]));
        let mut deep = DynamicImage::ImageRgb8(img).into_rgb16();
        deep.put_pixel(0, 0, image::Rgb([100, 0, 0]));
        deep.put_pixel(2, 0, image::Rgb([0, 0, 1]));

        let runeset = runeset_from_image(&DynamicImage::ImageRgb16(deep)).unwrap();
        assert_eq!(runeset.read_at(0).unwrap().rows()[0], 0x02);
    }

    #[test]
    fn test_float_channels_are_exact() {
        let mut img = image::Rgb32FImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, image::Rgb([1.0, 1.0, 1.0]));
        img.put_pixel(0, 0, image::Rgb([0.0, 0.0, 0.0]));
        img.put_pixel(1, 0, image::Rgb([0.0, 0.0001, 0.0]));

        let runeset = runeset_from_image(&DynamicImage::ImageRgb32F(img)).unwrap();
        assert_eq!(runeset.read_at(0).unwrap().rows()[0], 0x01);
    }

    #[test]
    fn test_wrong_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(255, 64));
        assert!(matches!(
            runeset_from_image(&img),
            Err(RunesetError::ImageDimensions { width: 255, height: 64 })
        ));
    }

    #[test]
    fn test_sheet_round_trip() {
        let mut runeset = Runeset::new();
        runeset.set_at(Glyph::new([0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF]), 65).unwrap();
        runeset.set_at(Glyph::new([0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]), 255).unwrap();

        let img = DynamicImage::ImageRgba8(runeset_to_image(&runeset));
        assert_eq!(runeset_from_image(&img).unwrap(), runeset);
    }
}
