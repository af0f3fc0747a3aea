//! Shape primitives
//!
//! Free functions that paint directly into a [`Canvas`], each taking a
//! placement plus a [`Style`]. They follow the replace-pixel model: drawing
//! a translucent color stores that color as-is instead of blending with
//! what is underneath. Blending between layers is the job of
//! [`Canvas::composite_over`].
//!
//! Placement is a [`Box2`] sampled at pixel centers, so a box of width 10
//! covers exactly 10 columns. Fills are painted before outlines, and
//! outlines straddle the shape boundary. Degenerate placements (empty
//! boxes, zero strokes, shapes that round to nothing) are skipped silently.

use crate::canvas::{Canvas, Mask};
use crate::color::{Rgb, Rgba};
use crate::geom::Box2;

/// How a shape is painted: an optional fill, an optional outline with its
/// stroke width, and a corner radius for the rectangle shapes. A style with
/// neither fill nor outline draws nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Rgba>,
    pub outline: Option<Rgba>,
    pub stroke: i32,
    pub radius: i32,
}

impl Style {
    pub fn fill(color: Rgba) -> Self {
        Self {
            fill: Some(color),
            outline: None,
            stroke: 1,
            radius: 0,
        }
    }

    pub fn outline(color: Rgba, stroke: i32) -> Self {
        Self {
            fill: None,
            outline: Some(color),
            stroke,
            radius: 0,
        }
    }

    pub fn with_outline(mut self, color: Rgba, stroke: i32) -> Self {
        self.outline = Some(color);
        self.stroke = stroke;
        self
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius.max(0);
        self
    }
}

/// Inclusive pixel-column span of a rounded rectangle at row `y`, or `None`
/// when the row misses the shape. The radius is clamped to half the shorter
/// side, so an oversized radius degrades to a capsule instead of
/// overflowing.
fn rounded_span(rect: Box2, radius: f32, y: i32) -> Option<(i32, i32)> {
    let (x0, y0, x1, y1) = (
        rect.x0 as f32,
        rect.y0 as f32,
        rect.x1 as f32,
        rect.y1 as f32,
    );
    let r = radius
        .max(0.0)
        .min(rect.width() as f32 / 2.0)
        .min(rect.height() as f32 / 2.0);
    let py = y as f32 + 0.5;
    if py <= y0 || py >= y1 {
        return None;
    }
    let (a, b) = if py < y0 + r {
        let dy = (y0 + r) - py;
        let dx = (r * r - dy * dy).max(0.0).sqrt();
        (x0 + r - dx, x1 - r + dx)
    } else if py > y1 - r {
        let dy = py - (y1 - r);
        let dx = (r * r - dy * dy).max(0.0).sqrt();
        (x0 + r - dx, x1 - r + dx)
    } else {
        (x0, x1)
    };
    span_to_columns(a, b)
}

/// Inclusive pixel-column span of an ellipse inscribed in `rect` at row `y`.
fn ellipse_span(rect: Box2, y: i32) -> Option<(i32, i32)> {
    let rx = rect.width() as f32 / 2.0;
    let ry = rect.height() as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let cx = (rect.x0 + rect.x1) as f32 / 2.0;
    let cy = (rect.y0 + rect.y1) as f32 / 2.0;
    let v = (y as f32 + 0.5 - cy) / ry;
    if v.abs() > 1.0 {
        return None;
    }
    let hw = rx * (1.0 - v * v).sqrt();
    span_to_columns(cx - hw, cx + hw)
}

/// Pixel columns whose centers fall inside the continuous span `[a, b]`.
fn span_to_columns(a: f32, b: f32) -> Option<(i32, i32)> {
    let xs = (a - 0.5).ceil() as i32;
    let xe = (b - 0.5).floor() as i32;
    if xs > xe {
        None
    } else {
        Some((xs, xe))
    }
}

/// Paints the band between an outer and an inner row-span shape, which is
/// how every outline here is stroked.
fn paint_band(
    canvas: &mut Canvas,
    color: Rgba,
    rows: std::ops::Range<i32>,
    outer: impl Fn(i32) -> Option<(i32, i32)>,
    inner: impl Fn(i32) -> Option<(i32, i32)>,
) {
    for y in rows {
        let Some((ox0, ox1)) = outer(y) else {
            continue;
        };
        match inner(y) {
            None => canvas.draw_horizontal_run(y, ox0, ox1, color),
            Some((ix0, ix1)) => {
                canvas.draw_horizontal_run(y, ox0, ix0 - 1, color);
                canvas.draw_horizontal_run(y, ix1 + 1, ox1, color);
            }
        }
    }
}

fn rounded_impl(canvas: &mut Canvas, bounds: Box2, radius: f32, style: Style) {
    if let Some(color) = style.fill {
        for y in bounds.y0..bounds.y1 {
            if let Some((xs, xe)) = rounded_span(bounds, radius, y) {
                canvas.draw_horizontal_run(y, xs, xe, color);
            }
        }
    }
    if let Some(color) = style.outline {
        let stroke = style.stroke.max(1);
        let grow = stroke / 2;
        let shrink = stroke - grow;
        let outer_rect = bounds.inset(-grow);
        let inner_rect = bounds.inset(shrink);
        let outer_r = radius + grow as f32;
        let inner_r = (radius - shrink as f32).max(0.0);
        paint_band(
            canvas,
            color,
            outer_rect.y0..outer_rect.y1,
            |y| rounded_span(outer_rect, outer_r, y),
            |y| rounded_span(inner_rect, inner_r, y),
        );
    }
}

/// Plain rectangle. The style's radius is ignored.
pub fn rect(canvas: &mut Canvas, bounds: Box2, style: Style) {
    rounded_impl(canvas, bounds, 0.0, style);
}

/// Rectangle with the style's corner radius.
pub fn rounded_rect(canvas: &mut Canvas, bounds: Box2, style: Style) {
    rounded_impl(canvas, bounds, style.radius as f32, style);
}

/// Capsule: the corner radius is always half the box height, whatever
/// radius the style carries.
pub fn pill(canvas: &mut Canvas, bounds: Box2, style: Style) {
    rounded_impl(canvas, bounds, bounds.height() as f32 / 2.0, style);
}

pub fn ellipse(canvas: &mut Canvas, bounds: Box2, style: Style) {
    if let Some(color) = style.fill {
        for y in bounds.y0..bounds.y1 {
            if let Some((xs, xe)) = ellipse_span(bounds, y) {
                canvas.draw_horizontal_run(y, xs, xe, color);
            }
        }
    }
    if let Some(color) = style.outline {
        let stroke = style.stroke.max(1);
        let grow = stroke / 2;
        let shrink = stroke - grow;
        let outer = bounds.inset(-grow);
        let inner = bounds.inset(shrink);
        paint_band(
            canvas,
            color,
            outer.y0..outer.y1,
            |y| ellipse_span(outer, y),
            |y| ellipse_span(inner, y),
        );
    }
}

pub fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, style: Style) {
    if r <= 0 {
        return;
    }
    ellipse(canvas, Box2::around(cx, cy, r), style);
}

/// Top-to-bottom linear gradient over `bounds`. Both endpoint colors land
/// exactly: the first row is `top`, the last row is `bottom`.
pub fn vertical_gradient(canvas: &mut Canvas, bounds: Box2, top: Rgb, bottom: Rgb) {
    let rows = bounds.height();
    if rows <= 0 {
        return;
    }
    for (i, y) in (bounds.y0..bounds.y1).enumerate() {
        let t = if rows > 1 {
            i as f32 / (rows - 1) as f32
        } else {
            0.0
        };
        let c = top.lerp(bottom, t).to_rgba();
        canvas.draw_horizontal_run(y, bounds.x0, bounds.x1 - 1, c);
    }
}

/// Bresenham line. Widths above 1 stamp a `width`-sized disc at every step,
/// which gives round caps and joins.
pub fn line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba, width: i32) {
    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if width <= 1 {
            canvas.set_pixel(x, y, color);
        } else {
            ellipse(canvas, Box2::centered(x, y, width, width), Style::fill(color));
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Circular or elliptical arc segment inscribed in `bounds`, swept
/// clockwise from `start_deg` to `end_deg` (0° = east, 90° = south). The
/// stroke grows inward from the outer edge. A sweep of 360° or more closes
/// the ring.
pub fn arc(
    canvas: &mut Canvas,
    bounds: Box2,
    start_deg: f32,
    end_deg: f32,
    color: Rgba,
    stroke: i32,
) {
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 || stroke <= 0 {
        return;
    }
    let cx = (bounds.x0 + bounds.x1) as f32 / 2.0;
    let cy = (bounds.y0 + bounds.y1) as f32 / 2.0;
    let full = (end_deg - start_deg).abs() >= 360.0;
    let sweep = (end_deg - start_deg).rem_euclid(360.0);
    let inner_rho = 1.0 - stroke as f32 / rx.min(ry);
    for y in bounds.y0..bounds.y1 {
        for x in bounds.x0..bounds.x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            let rho = (dx * dx + dy * dy).sqrt();
            if rho > 1.0 || rho < inner_rho {
                continue;
            }
            if !full {
                let theta = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                if (theta - start_deg).rem_euclid(360.0) > sweep {
                    continue;
                }
            }
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Closed polygon, even-odd filled and/or stroked along its edges. The last
/// point connects back to the first implicitly.
pub fn polygon(canvas: &mut Canvas, points: &[(f32, f32)], style: Style) {
    if points.len() < 3 {
        return;
    }
    if let Some(color) = style.fill {
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y.floor() as i32..=max_y.ceil() as i32 {
            let py = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let (px0, py0) = points[i];
                let (px1, py1) = points[(i + 1) % points.len()];
                // half-open edge rule so a vertex shared by two edges
                // counts once
                if (py0 <= py && py < py1) || (py1 <= py && py < py0) {
                    crossings.push(px0 + (py - py0) * (px1 - px0) / (py1 - py0));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                if let Some((xs, xe)) = span_to_columns(pair[0], pair[1]) {
                    canvas.draw_horizontal_run(y, xs, xe, color);
                }
            }
        }
    }
    if let Some(color) = style.outline {
        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];
            line(
                canvas,
                ax.round() as i32,
                ay.round() as i32,
                bx.round() as i32,
                by.round() as i32,
                color,
                style.stroke.max(1),
            );
        }
    }
}

/// Mask covering a rounded rectangle, used to clip composited layers (the
/// pill-shaped button gradient, the icon's corner framing).
pub fn rounded_rect_mask(width: u32, height: u32, bounds: Box2, radius: i32) -> Mask {
    let mut mask = Mask::new(width, height);
    for y in bounds.y0.max(0)..bounds.y1.min(height as i32) {
        if let Some((xs, xe)) = rounded_span(bounds, radius as f32, y) {
            for x in xs.max(0)..=xe.min(width as i32 - 1) {
                mask.set(x as u32, y as u32, 255);
            }
        }
    }
    mask
}
