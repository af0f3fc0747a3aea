//! Text measurement and rasterization
//!
//! Two glyph supplies behind one trait: [`TrueTypeSource`] wraps the first
//! usable system font, [`BitmapSource`] is an 8x8 pixel font that is always
//! available. [`FontStack`] picks TrueType when a system font exists and
//! falls back to the bitmap glyphs otherwise, so rendering never fails for
//! lack of a font.

mod bitmap;
mod truetype;

pub use bitmap::BitmapSource;
pub use truetype::TrueTypeSource;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geom::Box2;

/// Ink bounds of a run of text, relative to the draw origin (the top-left
/// of the line box). `y0` is usually positive: glyph ink starts below the
/// line top unless a glyph overshoots the ascent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// A source of rasterizable glyphs.
pub trait GlyphSource {
    /// Tight ink bounds of `text` at `size`, relative to the draw origin.
    fn bounds(&self, text: &str, size: f32) -> TextBounds;

    /// Rasterize `text` at `size`, reporting per-pixel coverage (0..=255)
    /// relative to the draw origin.
    fn rasterize(&self, text: &str, size: f32, put: &mut dyn FnMut(i32, i32, u8));
}

/// The glyph source the renderer actually draws with.
pub struct FontStack {
    source: Box<dyn GlyphSource + Send + Sync>,
}

impl FontStack {
    /// TrueType if a system font can be loaded, bitmap glyphs otherwise.
    /// The fallback is logged once per process by the loader.
    pub fn system() -> Self {
        match TrueTypeSource::load() {
            Ok(tt) => Self {
                source: Box::new(tt),
            },
            Err(err) => {
                log::warn!("falling back to bitmap glyphs: {}", err);
                Self::bitmap_only()
            }
        }
    }

    /// Bitmap glyphs only. Renders identically on every machine, which is
    /// what the golden-image tests need.
    pub fn bitmap_only() -> Self {
        Self {
            source: Box::new(BitmapSource),
        }
    }

    pub fn measure(&self, text: &str, size: f32) -> TextBounds {
        self.source.bounds(text, size)
    }

    /// Draw `text` with its line-box origin at `(x, y)`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, size: f32, color: Rgba) {
        self.source.rasterize(text, size, &mut |gx, gy, cov| {
            if cov > 0 {
                canvas.blend_pixel(x + gx, y + gy, color, cov);
            }
        });
    }

    /// Center the ink box of `text` inside `rect` and draw it.
    pub fn draw_centered(&self, canvas: &mut Canvas, rect: Box2, text: &str, size: f32, color: Rgba) {
        let (x, y) = self.centered_origin(rect, text, size);
        self.draw(canvas, x, y, text, size, color);
    }

    /// Centered text with a drop shadow: the shadow pass always lands
    /// strictly before the foreground pass, displaced by `offset`.
    pub fn draw_centered_shadowed(
        &self,
        canvas: &mut Canvas,
        rect: Box2,
        text: &str,
        size: f32,
        color: Rgba,
        shadow: Rgba,
        offset: (i32, i32),
    ) {
        let (x, y) = self.centered_origin(rect, text, size);
        self.draw(canvas, x + offset.0, y + offset.1, text, size, shadow);
        self.draw(canvas, x, y, text, size, color);
    }

    /// Draw `text` with its ink centered on `cx` and the line top at `top`.
    /// Scenes that anchor text to a fixed row use this instead of
    /// [`draw_centered`](FontStack::draw_centered).
    pub fn draw_centered_x(
        &self,
        canvas: &mut Canvas,
        cx: i32,
        top: i32,
        text: &str,
        size: f32,
        color: Rgba,
    ) {
        let b = self.measure(text, size);
        self.draw(canvas, cx - b.width() / 2 - b.x0, top, text, size, color);
    }

    /// [`draw_centered_x`](FontStack::draw_centered_x) with a drop shadow,
    /// shadow pass first.
    pub fn draw_centered_x_shadowed(
        &self,
        canvas: &mut Canvas,
        cx: i32,
        top: i32,
        text: &str,
        size: f32,
        color: Rgba,
        shadow: Rgba,
        offset: (i32, i32),
    ) {
        let b = self.measure(text, size);
        let x = cx - b.width() / 2 - b.x0;
        self.draw(canvas, x + offset.0, top + offset.1, text, size, shadow);
        self.draw(canvas, x, top, text, size, color);
    }

    fn centered_origin(&self, rect: Box2, text: &str, size: f32) -> (i32, i32) {
        let b = self.measure(text, size);
        let x = (rect.x0 + rect.x1 - b.width()) / 2 - b.x0;
        let y = (rect.y0 + rect.y1 - b.height()) / 2 - b.y0;
        (x, y)
    }
}
