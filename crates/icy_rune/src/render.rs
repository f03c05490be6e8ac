//! Plain text layouts for the charset overview and the glyph editing grid.

use icy_runeset::{preview::PREVIEW_SIZE, to_bit_grid, Glyph, Runeset, CHARSET_COLUMNS};

use crate::options::Options;

const GRID_ROW_SEPARATOR: &str = "──┼───┼───┼───┼───┼───┼───┼──";

/// All 256 previews as 8 rows of 32, with separator columns and lines between them.
pub fn overview(runeset: &Runeset, options: &Options) -> String {
    let sep = options.separator;
    let line_width = CHARSET_COLUMNS * (PREVIEW_SIZE + 1);
    let separator_line: String = std::iter::repeat_n(sep, line_width).collect();

    let previews: Vec<Vec<String>> = runeset
        .glyphs()
        .iter()
        .map(|glyph| icy_runeset::preview(glyph).split('\n').map(str::to_string).collect())
        .collect();

    let mut lines = Vec::new();
    for (row, chunk) in previews.chunks(CHARSET_COLUMNS).enumerate() {
        if row > 0 {
            lines.push(separator_line.clone());
        }
        for y in 0..PREVIEW_SIZE {
            let mut line = String::with_capacity(line_width * 3);
            for preview in chunk {
                line.push(sep);
                line.push_str(&preview[y]);
            }
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Caption line below the overview.
pub fn overview_caption(runeset: &Runeset) -> String {
    let used = runeset.glyphs().iter().filter(|g| !g.is_empty()).count();
    format!("{used} of {} glyphs in use", runeset.glyphs().len())
}

/// Full resolution editing grid of one glyph.
pub fn edit_grid(glyph: &Glyph, options: &Options) -> String {
    let grid = to_bit_grid(glyph);
    let mut result = String::new();
    for (i, row) in grid.iter().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(GRID_ROW_SEPARATOR);
            result.push('\n');
        }
        for (j, &pixel) in row.iter().enumerate() {
            if j > 0 {
                result.push_str(" │ ");
            }
            result.push(if pixel { options.pixel_on } else { options.pixel_off });
        }
    }
    result
}

/// `0x41 (01, 02)` - index in hex followed by its overview column and row.
pub fn glyph_caption(index: i32, glyph: &Glyph) -> String {
    let columns = CHARSET_COLUMNS as i32;
    format!("0x{index:02x} ({:02}, {:02})  [{glyph}]", index % columns, index / columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icy_runeset::GLYPH_SIZE;

    #[test]
    fn test_overview_dimensions() {
        let options = Options::default();
        let text = overview(&Runeset::new(), &options);
        let lines: Vec<&str> = text.split('\n').collect();
        // 8 rows of 4 preview lines plus 7 separator lines
        assert_eq!(lines.len(), 8 * 4 + 7);
        assert!(lines.iter().all(|l| l.chars().count() == 32 * 5));
        assert!(lines[4].chars().all(|c| c == '▞'));
        assert!(lines[0].starts_with("▞    ▞"));
    }

    #[test]
    fn test_overview_places_glyph() {
        let mut runeset = Runeset::new();
        runeset.set_at(Glyph::FULL, 33).unwrap();
        let text = overview(&runeset, &Options::default());
        let lines: Vec<&str> = text.split('\n').collect();
        // glyph 33 = second overview row, second column
        let line: Vec<char> = lines[5].chars().collect();
        assert_eq!(line[5], '▞');
        assert_eq!(line[6..10].iter().collect::<String>(), "████");
    }

    #[test]
    fn test_edit_grid() {
        let glyph = Glyph::BLANK.with_pixel_toggled(0, 0).with_pixel_toggled(7, 7);
        let options = Options {
            pixel_on: '#',
            pixel_off: '.',
            ..Default::default()
        };
        let text = edit_grid(&glyph, &options);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), GLYPH_SIZE * 2 - 1);
        assert_eq!(lines[0], "# │ . │ . │ . │ . │ . │ . │ .");
        assert_eq!(lines[1], GRID_ROW_SEPARATOR);
        assert_eq!(lines[14], ". │ . │ . │ . │ . │ . │ . │ #");
    }

    #[test]
    fn test_captions() {
        assert_eq!(glyph_caption(65, &Glyph::FULL), "0x41 (01, 02)  [FF FF FF FF FF FF FF FF]");
        let mut runeset = Runeset::new();
        runeset.set_at(Glyph::FULL, 1).unwrap();
        assert_eq!(overview_caption(&runeset), "1 of 256 glyphs in use");
    }
}
