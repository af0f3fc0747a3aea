//! Compound shapes
//!
//! Decorative motifs assembled from the primitives in [`crate::draw`]:
//! clouds, the rainbow arch, the star mascot, stamp slots, the puppy, the
//! confetti field, sun rays and the gradient call-to-action button. Fixed
//! proportions live here as constants; anything theme-dependent (rainbow
//! colors, stamp gold, button gradient) is passed in by the caller.

use crate::canvas::Canvas;
use crate::color::{Rgb, Rgba};
use crate::draw::{self, Style};
use crate::geom::{polar, Box2};
use crate::rng::SeededRng;
use crate::text::FontStack;

const FACE_INK: Rgba = Rgba::new(51, 51, 51, 255);
const CHEEK_PINK: Rgba = Rgba::new(255, 153, 153, 128);
const SLOT_BASE: Rgba = Rgba::new(240, 249, 255, 255);
const CLOUD_WHITE: Rgba = Rgba::new(255, 255, 255, 200);
const PUFF_WHITE: Rgba = Rgba::new(255, 255, 255, 220);
const SHINE_WHITE: Rgba = Rgba::new(255, 255, 255, 180);
const RAY_WHITE: Rgba = Rgba::new(255, 255, 255, 38);
const GLOW_WHITE: Rgba = Rgba::new(255, 255, 255, 48);
const LABEL_SHADOW: Rgba = Rgba::new(0, 0, 0, 48);
const PUPPY_COAT: Rgba = Rgba::new(212, 165, 116, 255);
const PUPPY_EAR: Rgba = Rgba::new(196, 149, 106, 255);
const PUPPY_TONGUE: Rgba = Rgba::new(255, 143, 171, 255);

/// Three overlapping semi-opaque ellipses anchored at the top-left corner
/// `(x, y)` of the puff cluster.
pub fn cloud(canvas: &mut Canvas, x: i32, y: i32, scale: f32) {
    let s = |v: i32| (v as f32 * scale) as i32;
    let puff = Style::fill(CLOUD_WHITE);
    draw::ellipse(canvas, Box2::new(x, y + s(10), x + s(60), y + s(50)), puff);
    draw::ellipse(canvas, Box2::new(x + s(20), y, x + s(100), y + s(50)), puff);
    draw::ellipse(
        canvas,
        Box2::new(x + s(50), y + s(10), x + s(110), y + s(50)),
        puff,
    );
}

/// Rainbow arch with `(cx, cy)` at its bottom-center: one semicircular band
/// per color, outermost first, plus a white puff at each foot.
pub fn rainbow(canvas: &mut Canvas, cx: i32, cy: i32, colors: &[Rgb]) {
    let base_radius = 120;
    let thickness = 8;
    for (i, color) in colors.iter().enumerate() {
        let r = base_radius - i as i32 * thickness;
        if r <= 0 {
            break;
        }
        draw::arc(
            canvas,
            Box2::around(cx, cy, r),
            180.0,
            360.0,
            color.to_rgba(),
            thickness,
        );
    }
    let puff_r = 12;
    draw::circle(canvas, cx - base_radius + 5, cy + 2, puff_r, Style::fill(PUFF_WHITE));
    draw::circle(canvas, cx + base_radius - 5, cy + 2, puff_r, Style::fill(PUFF_WHITE));
}

/// Filled n-point star. Vertices alternate between the outer and inner
/// radius, starting from the topmost outer point.
pub fn star_polygon(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    outer_r: f32,
    inner_r: f32,
    points: u32,
    color: Rgba,
) {
    if points < 2 {
        return;
    }
    let step = 180.0 / points as f32;
    let vertices: Vec<(f32, f32)> = (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer_r } else { inner_r };
            polar(cx, cy, r, -90.0 + i as f32 * step)
        })
        .collect();
    draw::polygon(canvas, &vertices, Style::fill(color));
}

/// The star character: gold star body with dot eyes, blush cheeks and a
/// small smile. `size` is the body diameter; every facial offset scales
/// with it.
pub fn star_mascot(canvas: &mut Canvas, cx: i32, cy: i32, size: i32, body: Rgb) {
    let r = size / 2;
    draw::circle(canvas, cx, cy, r, Style::fill(body.to_rgba()));
    star_polygon(
        canvas,
        cx as f32,
        cy as f32,
        r as f32 * 1.1,
        r as f32 * 0.5,
        5,
        body.to_rgba(),
    );

    let f = size as f32;
    let eye_y = (cy as f32 - f * 0.05) as i32;
    let eye_gap = (f * 0.12) as i32;
    let eye_r = ((f * 0.06) as i32).max(2);
    draw::circle(canvas, cx - eye_gap, eye_y, eye_r, Style::fill(FACE_INK));
    draw::circle(canvas, cx + eye_gap, eye_y, eye_r, Style::fill(FACE_INK));

    let cheek_y = (cy as f32 + f * 0.08) as i32;
    let cheek_gap = (f * 0.22) as i32;
    let cheek_r = ((f * 0.07) as i32).max(2);
    draw::circle(canvas, cx - cheek_gap, cheek_y, cheek_r, Style::fill(CHEEK_PINK));
    draw::circle(canvas, cx + cheek_gap, cheek_y, cheek_r, Style::fill(CHEEK_PINK));

    let mouth_y = (cy as f32 + f * 0.12) as i32;
    let mouth_w = ((f * 0.1) as i32).max(2);
    draw::arc(
        canvas,
        Box2::new(cx - mouth_w, mouth_y - mouth_w / 2, cx + mouth_w, mouth_y + mouth_w),
        0.0,
        180.0,
        FACE_INK,
        (size / 20).max(1),
    );
}

/// One cell of the stamp grid. Filled slots get a gold star with a shine
/// dot; empty slots get a dashed ring.
pub fn stamp_slot(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    cell_size: i32,
    filled: bool,
    ring: Rgb,
    star: Rgb,
) {
    let r = cell_size / 2;
    if filled {
        draw::circle(
            canvas,
            cx,
            cy,
            r,
            Style::fill(SLOT_BASE).with_outline(ring.to_rgba(), 1),
        );
        let star_r = cell_size as f32 * 0.35;
        star_polygon(
            canvas,
            cx as f32,
            cy as f32,
            star_r,
            star_r * 0.45,
            5,
            star.to_rgba(),
        );
        let sr = star_r as i32;
        draw::circle(
            canvas,
            cx - sr / 3,
            cy - sr / 3,
            (sr / 6).max(1),
            Style::fill(SHINE_WHITE),
        );
    } else {
        draw::circle(canvas, cx, cy, r, Style::fill(SLOT_BASE));
        // dashed ring: an 8 degree arc segment every 15 degrees
        for deg in (0..360).step_by(15) {
            draw::arc(
                canvas,
                Box2::around(cx, cy, r),
                deg as f32,
                deg as f32 + 8.0,
                ring.to_rgba(),
                2,
            );
        }
    }
}

/// Pill-shaped call-to-action button: vertical gradient clipped to the pill
/// mask, a translucent highlight over the whole face, then the label drawn
/// shadow-first.
pub fn gradient_button(
    canvas: &mut Canvas,
    fonts: &FontStack,
    rect: Box2,
    label: &str,
    top: Rgb,
    bottom: Rgb,
    text_size: f32,
) {
    let radius = rect.height() / 2;
    let mut fill = canvas.overlay();
    draw::vertical_gradient(&mut fill, rect, top, bottom);
    let mask = draw::rounded_rect_mask(canvas.width(), canvas.height(), rect, radius);
    canvas.composite_over(&fill, Some(&mask));

    let mut glow = canvas.overlay();
    draw::pill(&mut glow, rect, Style::fill(GLOW_WHITE));
    canvas.composite_over(&glow, None);

    fonts.draw_centered_shadowed(canvas, rect, label, text_size, Rgba::WHITE, LABEL_SHADOW, (1, 1));
}

/// The reward-screen puppy, centered on `(cx, cy)` at the head.
pub fn puppy(canvas: &mut Canvas, cx: i32, cy: i32, scale: f32) {
    let s = |v: i32| (v as f32 * scale) as i32;
    let coat = Style::fill(PUPPY_COAT);

    let (bw, bh) = (s(70), s(50));
    draw::rounded_rect(
        canvas,
        Box2::new(cx - bw / 2, cy + s(30), cx + bw / 2, cy + s(30) + bh),
        coat.with_radius(s(20)),
    );

    let (leg_w, leg_h) = (s(18), s(20));
    for dx in [-s(20), s(20)] {
        draw::rounded_rect(
            canvas,
            Box2::new(
                cx + dx - leg_w / 2,
                cy + s(70),
                cx + dx + leg_w / 2,
                cy + s(70) + leg_h,
            ),
            coat.with_radius(s(8)),
        );
    }

    let hw = s(100);
    draw::rounded_rect(
        canvas,
        Box2::new(cx - hw / 2, cy - s(45), cx + hw / 2, cy + s(45)),
        coat.with_radius(s(50)),
    );

    let (ear_w, ear_h) = (s(30), s(40));
    for dx in [-s(35), s(35)] {
        let ex = cx + dx;
        draw::ellipse(
            canvas,
            Box2::new(ex - ear_w / 2, cy - s(55), ex + ear_w / 2, cy - s(55) + ear_h),
            Style::fill(PUPPY_EAR),
        );
    }

    let eye_r = s(11);
    for dx in [-s(20), s(20)] {
        draw::circle(canvas, cx + dx, cy - s(5), eye_r, Style::fill(FACE_INK));
        draw::circle(
            canvas,
            cx + dx - s(3),
            cy - s(9),
            s(4).max(1),
            Style::fill(Rgba::WHITE),
        );
    }

    let (nw, nh) = (s(14), s(10));
    draw::ellipse(
        canvas,
        Box2::new(cx - nw / 2, cy + s(10), cx + nw / 2, cy + s(10) + nh),
        Style::fill(FACE_INK),
    );

    let (tw, th) = (s(16), s(12));
    draw::ellipse(
        canvas,
        Box2::new(cx - tw / 2, cy + s(20), cx + tw / 2, cy + s(20) + th),
        Style::fill(PUPPY_TONGUE),
    );
}

/// Scatter of small rounded confetti pieces over the upper part of the
/// canvas (the bottom 200 rows stay clear). Same seed, same scatter.
pub fn confetti(canvas: &mut Canvas, colors: &[Rgb], count: u32, seed: u32) {
    if colors.is_empty() {
        return;
    }
    let mut rng = SeededRng::new(seed);
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for _ in 0..count {
        let x = rng.range_i32(0, w);
        let y = rng.range_i32(0, (h - 200).max(0));
        let pw = rng.range_i32(8, 14);
        let ph = rng.range_i32(4, 7);
        let color = *rng.pick(colors);
        draw::rounded_rect(
            canvas,
            Box2::new(x, y, x + pw, y + ph),
            Style::fill(color.to_rgba()).with_radius(2),
        );
    }
}

/// Ring of colored dots around a freshly earned stamp. One dot per color,
/// evenly spaced on a circle of fixed radius.
pub fn particle_burst(canvas: &mut Canvas, cx: i32, cy: i32, colors: &[Rgb]) {
    let dist = 25.0;
    let dot_r = 5;
    let n = colors.len();
    if n == 0 {
        return;
    }
    for (i, color) in colors.iter().enumerate() {
        let (px, py) = polar(cx as f32, cy as f32, dist, i as f32 / n as f32 * 360.0);
        draw::circle(canvas, px as i32, py as i32, dot_r, Style::fill(color.to_rgba()));
    }
}

/// Radiating white wedges centered on `(cx, cy)`. The rays are built on one
/// overlay and composited in a single pass so their translucency never
/// stacks against the background.
pub fn sun_rays(canvas: &mut Canvas, cx: i32, cy: i32, count: u32) {
    if count == 0 {
        return;
    }
    let mut layer = canvas.overlay();
    let ray_len = canvas.width() as f32 * 1.5;
    let step = 360.0 / count as f32;
    let (cxf, cyf) = (cx as f32, cy as f32);
    for i in 0..count {
        let a = i as f32 * step;
        let tip1 = polar(cxf, cyf, ray_len, a);
        let tip2 = polar(cxf, cyf, ray_len, a + 8.0);
        draw::polygon(&mut layer, &[(cxf, cyf), tip1, tip2], Style::fill(RAY_WHITE));
    }
    canvas.composite_over(&layer, None);
}

/// Two lobes plus a point. `r` is the lobe radius.
pub fn heart(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Rgba) {
    let lobe = Style::fill(color);
    draw::ellipse(canvas, Box2::new(cx - r - 2, cy - r, cx + 2, cy + r / 2), lobe);
    draw::ellipse(canvas, Box2::new(cx - 2, cy - r, cx + r + 2, cy + r / 2), lobe);
    draw::polygon(
        canvas,
        &[
            ((cx - r - 4) as f32, cy as f32),
            ((cx + r + 4) as f32, cy as f32),
            (cx as f32, (cy + r + 8) as f32),
        ],
        lobe,
    );
}

/// Two-stroke tick mark sized for a ~30px radius slot.
pub fn checkmark(canvas: &mut Canvas, cx: i32, cy: i32, color: Rgba, stroke: i32) {
    draw::line(canvas, cx - 16, cy - 2, cx - 4, cy + 14, color, stroke);
    draw::line(canvas, cx - 4, cy + 14, cx + 18, cy - 14, color, stroke);
}

/// Tiny glint: a colored dot with a white core.
pub fn sparkle(canvas: &mut Canvas, cx: i32, cy: i32, color: Rgb) {
    draw::circle(canvas, cx, cy, 4, Style::fill(color.to_rgba()));
    draw::circle(canvas, cx, cy, 2, Style::fill(Rgba::WHITE));
}

/// Ribbon banner with folded tails, used by the icon. `rect` is the main
/// band; the tails extend `fold_w` beyond it on each side.
pub fn ribbon(canvas: &mut Canvas, rect: Box2, fold_w: i32, face_top: Rgb, face_bottom: Rgb, tail: Rgb) {
    let mid_y = ((rect.y0 + rect.y1) / 2) as f32;
    let tail_style = Style::fill(tail.to_rgba());
    draw::polygon(
        canvas,
        &[
            ((rect.x0 - fold_w) as f32, mid_y),
            ((rect.x0 + 10) as f32, (rect.y0 - 5) as f32),
            ((rect.x0 + 10) as f32, (rect.y1 + 5) as f32),
        ],
        tail_style,
    );
    draw::polygon(
        canvas,
        &[
            ((rect.x1 + fold_w) as f32, mid_y),
            ((rect.x1 - 10) as f32, (rect.y0 - 5) as f32),
            ((rect.x1 - 10) as f32, (rect.y1 + 5) as f32),
        ],
        tail_style,
    );
    draw::vertical_gradient(canvas, rect, face_top, face_bottom);
}

/// Rounded-rect stamp pad with its handle, as seen next to the icon mascot.
pub fn stamp_pad(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, body: Rgb, edge: Rgb) {
    draw::rounded_rect(
        canvas,
        Box2::new(x, y, x + w, y + h),
        Style::fill(body.to_rgba())
            .with_outline(edge.to_rgba(), 2)
            .with_radius(8),
    );
    let lighter = Rgb::new(body.r.saturating_add(32), body.g, body.b.saturating_add(32));
    draw::rounded_rect(
        canvas,
        Box2::new(x + 15, y - 20, x + w - 15, y + 5),
        Style::fill(lighter.to_rgba())
            .with_outline(edge.to_rgba(), 2)
            .with_radius(5),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn blank(w: u32, h: u32) -> Canvas {
        Canvas::transparent(w, h).unwrap()
    }

    #[test]
    fn star_points_up() {
        let mut c = blank(100, 100);
        let gold = Rgba::new(255, 215, 0, 255);
        star_polygon(&mut c, 50.0, 50.0, 40.0, 18.0, 5, gold);
        // topmost outer vertex
        assert_eq!(c.pixel(50, 15), Some(gold));
        // between two arms at the outer radius nothing is painted
        assert_eq!(c.pixel(85, 25), Some(Rgba::TRANSPARENT));
        // center is inside
        assert_eq!(c.pixel(50, 50), Some(gold));
    }

    #[test]
    fn rainbow_bands_sit_above_center() {
        let mut c = blank(300, 200);
        let colors = [
            Rgb::new(255, 107, 107),
            Rgb::new(255, 165, 89),
            Rgb::new(255, 230, 109),
        ];
        rainbow(&mut c, 150, 150, &colors);
        // outermost band spans radius 112..120 straight up from the base
        assert_eq!(c.pixel(150, 150 - 116), Some(colors[0].to_rgba()));
        // below the base line stays clear apart from the feet puffs
        assert_eq!(c.pixel(150, 170), Some(Rgba::TRANSPARENT));
        // hole inside the innermost band
        assert_eq!(c.pixel(150, 150 - 40), Some(Rgba::TRANSPARENT));
        // foot puff at the left end
        assert_eq!(c.pixel(150 - 115, 152), Some(Rgba::new(255, 255, 255, 220)));
    }

    #[test]
    fn filled_and_empty_slots_differ_at_center() {
        let ring = Rgb::new(184, 228, 249);
        let star = Rgb::new(255, 215, 0);
        let mut filled = blank(80, 80);
        stamp_slot(&mut filled, 40, 40, 56, true, ring, star);
        let mut empty = blank(80, 80);
        stamp_slot(&mut empty, 40, 40, 56, false, ring, star);
        assert_eq!(filled.pixel(40, 40), Some(star.to_rgba()));
        assert_eq!(empty.pixel(40, 40), Some(Rgba::new(240, 249, 255, 255)));
    }

    #[test]
    fn confetti_is_deterministic_and_stays_clear_of_the_bottom() {
        let colors = [Rgb::new(255, 157, 210), Rgb::new(91, 200, 245)];
        let mut a = blank(200, 400);
        let mut b = blank(200, 400);
        confetti(&mut a, &colors, 30, 42);
        confetti(&mut b, &colors, 30, 42);
        let mut painted = 0;
        for y in 0..400 {
            for x in 0..200 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y));
                if a.pixel(x, y) != Some(Rgba::TRANSPARENT) {
                    painted += 1;
                    // pieces are at most 7 tall and start no lower than h-200
                    assert!(y < 400 - 200 + 7, "confetti at row {}", y);
                }
            }
        }
        assert!(painted > 0);
    }

    #[test]
    fn sun_rays_lighten_exactly_once() {
        let bg = Rgba::new(100, 100, 100, 255);
        let mut c = Canvas::new(200, 200, bg).unwrap();
        sun_rays(&mut c, 100, 100, 12);
        // inside the first wedge (just south of due east)
        let lit = c.pixel(150, 102).unwrap();
        let expected = 100.0 + (255.0 - 100.0) * 38.0 / 255.0;
        assert!((lit.r as f32 - expected).abs() <= 2.0, "got {}", lit.r);
        // between wedges the background is untouched
        assert_eq!(c.pixel(150, 95), Some(bg));
    }

    #[test]
    fn puppy_body_and_eyes_use_their_colors() {
        let mut c = blank(300, 300);
        puppy(&mut c, 150, 120, 1.0);
        assert_eq!(c.pixel(150, 90), Some(PUPPY_COAT)); // forehead
        assert_eq!(c.pixel(130, 115), Some(FACE_INK)); // left eye
    }

    #[test]
    fn heart_has_both_lobes_and_a_point() {
        let mut c = blank(60, 60);
        let pink = Rgba::new(255, 105, 140, 255);
        heart(&mut c, 30, 25, 14, pink);
        assert_eq!(c.pixel(23, 20), Some(pink)); // left lobe
        assert_eq!(c.pixel(37, 20), Some(pink)); // right lobe
        assert_eq!(c.pixel(30, 42), Some(pink)); // tip
        assert_eq!(c.pixel(30, 5), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn button_clips_its_gradient_to_the_pill() {
        let bg = Rgba::new(10, 20, 30, 255);
        let mut c = Canvas::new(200, 80, bg).unwrap();
        let fonts = FontStack::bitmap_only();
        gradient_button(
            &mut c,
            &fonts,
            Box2::new(20, 10, 180, 66),
            "GO",
            Rgb::new(91, 200, 245),
            Rgb::new(74, 184, 229),
            22.0,
        );
        // square corner of the layout box stays background
        assert_eq!(c.pixel(20, 10), Some(bg));
        // pill face is painted
        assert_ne!(c.pixel(100, 38), Some(bg));
    }
}
