//! Mutable RGBA pixel buffer plus the single-channel [`Mask`]
//!
//! A [`Canvas`] is created once per scene and mutated in place by every draw
//! call. Primitive painters *replace* pixels (a translucent fill stores its
//! alpha rather than blending on write); translucent layering happens by
//! drawing onto a scratch canvas and calling [`Canvas::composite_over`],
//! optionally restricted by a mask. This mirrors how the scenes are built:
//! shadows, glows, modal dims and sun rays are each one overlay pass.

use image::{GrayImage, RgbImage, RgbaImage};

use crate::color::{Rgb, Rgba};
use crate::error::{Error, Result};

/// Single-channel weight buffer for masked compositing.
/// 0 = fully excluded, 255 = fully included, in-between = blend weight.
#[derive(Debug, Clone)]
pub struct Mask {
    data: GrayImage,
}

impl Mask {
    /// All-zero (fully excluding) mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: GrayImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn set(&mut self, x: u32, y: u32, weight: u8) {
        if x < self.data.width() && y < self.data.height() {
            self.data.put_pixel(x, y, image::Luma([weight]));
        }
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x < self.data.width() && y < self.data.height() {
            self.data.get_pixel(x, y).0[0]
        } else {
            0
        }
    }
}

/// RGBA8 pixel buffer with straight (non-premultiplied) alpha.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Create a buffer filled with `fill`. Zero-sized dimensions are the one
    /// fatal input and are rejected before anything is drawn.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension(format!(
                "canvas must be at least 1x1 (got {}x{})",
                width, height
            )));
        }
        let pixels = RgbaImage::from_pixel(width, height, image::Rgba([fill.r, fill.g, fill.b, fill.a]));
        Ok(Self { pixels })
    }

    /// Fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, Rgba::TRANSPARENT)
    }

    /// Same-size fully transparent buffer, for building a layer that will be
    /// composited back onto this one.
    pub fn overlay(&self) -> Canvas {
        Canvas {
            pixels: RgbaImage::new(self.width(), self.height()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Replace one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        self.pixels
            .put_pixel(x, y, image::Rgba([color.r, color.g, color.b, color.a]));
    }

    /// Source-over blend one pixel, weighted by `coverage` (used for glyph
    /// edges). Out-of-range coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        let dst = self.pixels.get_pixel(x, y).0;
        let out = blend(
            Rgba::new(dst[0], dst[1], dst[2], dst[3]),
            color,
            coverage,
        );
        self.pixels
            .put_pixel(x, y, image::Rgba([out.r, out.g, out.b, out.a]));
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.pixels.width() && y < self.pixels.height() {
            let p = self.pixels.get_pixel(x, y).0;
            Some(Rgba::new(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Replace one row segment, inclusive of both x endpoints. An
    /// out-of-range `y` or an inverted x-range after clamping is a no-op,
    /// never an error.
    pub fn draw_horizontal_run(&mut self, y: i32, x_start: i32, x_end: i32, color: Rgba) {
        if y < 0 || y >= self.pixels.height() as i32 {
            return;
        }
        let x0 = x_start.max(0);
        let x1 = x_end.min(self.pixels.width() as i32 - 1);
        if x0 > x1 {
            return;
        }
        let px = image::Rgba([color.r, color.g, color.b, color.a]);
        for x in x0..=x1 {
            self.pixels.put_pixel(x as u32, y as u32, px);
        }
    }

    /// Alpha-blend `other` onto `self`, optionally restricted by `mask`.
    /// The mask must match the canvas dimensions; the effective source alpha
    /// of each pixel is scaled by its mask weight.
    pub fn composite_over(&mut self, other: &Canvas, mask: Option<&Mask>) {
        debug_assert_eq!(self.width(), other.width());
        debug_assert_eq!(self.height(), other.height());
        let w = self.width().min(other.width());
        let h = self.height().min(other.height());
        for y in 0..h {
            for x in 0..w {
                let s = other.pixels.get_pixel(x, y).0;
                let weight = match mask {
                    Some(m) => m.get(x, y),
                    None => 255,
                };
                if weight == 0 || s[3] == 0 {
                    continue;
                }
                let d = self.pixels.get_pixel(x, y).0;
                let out = blend(
                    Rgba::new(d[0], d[1], d[2], d[3]),
                    Rgba::new(s[0], s[1], s[2], s[3]),
                    weight,
                );
                self.pixels
                    .put_pixel(x, y, image::Rgba([out.r, out.g, out.b, out.a]));
            }
        }
    }

    /// Extract the alpha plane as a mask.
    pub fn split_alpha(&self) -> Mask {
        let mut mask = Mask::new(self.width(), self.height());
        for (x, y, p) in self.pixels.enumerate_pixels() {
            mask.set(x, y, p.0[3]);
        }
        mask
    }

    /// Composite `self` over a solid background, producing the opaque RGB
    /// buffer that gets encoded. The alpha plane acts as the paste mask.
    /// Called once per scene, right before output.
    pub fn flatten_to_opaque(&self, background: Rgb) -> RgbImage {
        let alpha = self.split_alpha();
        let mut out = RgbImage::from_pixel(
            self.width(),
            self.height(),
            image::Rgb([background.r, background.g, background.b]),
        );
        for (x, y, p) in self.pixels.enumerate_pixels() {
            let a = alpha.get(x, y);
            if a == 0 {
                continue;
            }
            let af = a as f32 / 255.0;
            let bg = out.get_pixel(x, y).0;
            let ch = |s: u8, d: u8| (s as f32 * af + d as f32 * (1.0 - af)).round() as u8;
            out.put_pixel(
                x,
                y,
                image::Rgb([ch(p.0[0], bg[0]), ch(p.0[1], bg[1]), ch(p.0[2], bg[2])]),
            );
        }
        out
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Straight-alpha source-over. `weight` scales the source alpha (mask or
/// glyph coverage). Color channels are un-premultiplied, so compositing an
/// opaque layer onto a fully transparent one preserves its colors exactly.
fn blend(dst: Rgba, src: Rgba, weight: u8) -> Rgba {
    let sa = (src.a as f32 / 255.0) * (weight as f32 / 255.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let ch = |s: u8, d: u8| {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a).round() as u8
    };
    Rgba::new(
        ch(src.r, dst.r),
        ch(src.g, dst.g),
        ch(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}
