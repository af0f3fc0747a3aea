//! TrueType glyph source
//!
//! Loads the first parsable font from a fixed probe list, CJK-capable fonts
//! first so the Japanese strings keep real glyphs where Noto or Hiragino is
//! installed. The font file is read once per process and shared.

use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};

use super::{GlyphSource, TextBounds};
use crate::error::{Error, Result};

const FONT_PATHS: [&str; 8] = [
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

fn system_font() -> Option<&'static FontArc> {
    static FONT: OnceLock<Option<FontArc>> = OnceLock::new();
    FONT.get_or_init(|| {
        for path in &FONT_PATHS {
            if let Ok(data) = std::fs::read(path) {
                if let Ok(font) = FontArc::try_from_vec(data) {
                    log::debug!("loaded font {}", path);
                    return Some(font);
                }
            }
        }
        None
    })
    .as_ref()
}

pub struct TrueTypeSource {
    font: &'static FontArc,
}

impl TrueTypeSource {
    pub fn load() -> Result<Self> {
        system_font()
            .map(|font| Self { font })
            .ok_or_else(|| Error::FontUnavailable("no usable system font found".to_string()))
    }
}

impl GlyphSource for TrueTypeSource {
    fn bounds(&self, text: &str, size: f32) -> TextBounds {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, ascent));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                min_x = min_x.min(b.min.x);
                min_y = min_y.min(b.min.y);
                max_x = max_x.max(b.max.x);
                max_y = max_y.max(b.max.y);
            }
            caret += scaled.h_advance(id);
        }
        if !min_x.is_finite() {
            // whitespace-only: no ink, the caret still advanced
            return TextBounds {
                x0: 0,
                y0: 0,
                x1: caret.round() as i32,
                y1: 0,
            };
        }
        TextBounds {
            x0: min_x.floor() as i32,
            y0: min_y.floor() as i32,
            x1: max_x.ceil() as i32,
            y1: max_y.ceil() as i32,
        }
    }

    fn rasterize(&self, text: &str, size: f32, put: &mut dyn FnMut(i32, i32, u8)) {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, ascent));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = b.min.x as i32 + gx as i32;
                    let y = b.min.y as i32 + gy as i32;
                    let cov = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                    put(x, y, cov);
                });
            }
            caret += scaled.h_advance(id);
        }
    }
}
