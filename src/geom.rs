//! Placement geometry
//!
//! [`Box2`] is the unit of placement for every shape and text block: an
//! axis-aligned rectangle in pixel coordinates, stored as its two corners.
//! Angles everywhere in the crate are degrees measured clockwise from the
//! 3 o'clock position (0° = east, 90° = south), which is the convention the
//! arc, rainbow and smile painters rely on.

/// Axis-aligned rectangle: `x0 <= x1`, `y0 <= y1` (normalized on creation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Box2 {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Box2 {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Box centered on `(cx, cy)` with the given width and height.
    pub fn centered(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, cx - w / 2 + w, cy - h / 2 + h)
    }

    /// Square box spanning a circle of radius `r` around `(cx, cy)`.
    pub fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Shrink (positive `d`) or grow (negative `d`) on all four sides.
    pub fn inset(&self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }
}

/// Point on a circle of `radius` around `(cx, cy)` at `degrees`
/// clockwise from east.
pub fn polar(cx: f32, cy: f32, radius: f32, degrees: f32) -> (f32, f32) {
    let rad = degrees.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}
