//! 8x8 bitmap glyph source
//!
//! Integer-scaled pixel glyphs with no external files, so it works on any
//! machine. Covers ASCII, Latin-1 and hiragana; anything else renders as a
//! hollow box placeholder.

use font8x8::{
    UnicodeFonts, BASIC_FONTS, BOX_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, MISC_FONTS,
};

use super::{GlyphSource, TextBounds};

const CELL: i32 = 8;

const MISSING_GLYPH: [u8; 8] = [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF];

fn lookup(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| HIRAGANA_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| MISC_FONTS.get(c))
        .or_else(|| BOX_FONTS.get(c))
        .unwrap_or(MISSING_GLYPH)
}

fn scale_for(size: f32) -> i32 {
    ((size / CELL as f32).round() as i32).max(1)
}

pub struct BitmapSource;

impl GlyphSource for BitmapSource {
    fn bounds(&self, text: &str, size: f32) -> TextBounds {
        let k = scale_for(size);
        let chars = text.chars().count() as i32;
        TextBounds {
            x0: 0,
            y0: 0,
            x1: chars * CELL * k,
            y1: CELL * k,
        }
    }

    fn rasterize(&self, text: &str, size: f32, put: &mut dyn FnMut(i32, i32, u8)) {
        let k = scale_for(size);
        for (i, ch) in text.chars().enumerate() {
            let glyph = lookup(ch);
            let cell_x = i as i32 * CELL * k;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..CELL {
                    // bit 0 is the leftmost column
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    for dy in 0..k {
                        for dx in 0..k {
                            put(cell_x + col * k + dx, row as i32 * k + dy, 255);
                        }
                    }
                }
            }
        }
    }
}
