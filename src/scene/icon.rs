//! The 1024x1024 app icon. Unlike the screenshots this is brand artwork
//! with its own fixed palette, and it is the one scene encoded with its
//! alpha channel so the rounded corners stay transparent.

use crate::canvas::Canvas;
use crate::color::{Rgb, Rgba};
use crate::draw::{self, Style};
use crate::geom::Box2;
use crate::shapes;

use super::{OutputMode, Pipeline, SceneContext};

const SIZE: i32 = 1024;
const CORNER_RADIUS: i32 = 180;

const HEADLINE: &str = "CHORES!";
const RIBBON_LABEL: &str = "REWARD!";

const SKY_TOP: Rgb = Rgb::new(135, 206, 235);
const SKY_BOTTOM: Rgb = Rgb::new(176, 224, 255);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const GOLD_RIM: Rgb = Rgb::new(218, 165, 32);
const HEADLINE_SHADOW: Rgba = Rgba::new(60, 60, 80, 200);
const EYE_INK: Rgba = Rgba::new(30, 30, 30, 255);
const CHEEK: Rgba = Rgba::new(255, 153, 153, 160);
const SMILE: Rgba = Rgba::new(80, 50, 30, 255);
const SHOE: Rgba = Rgba::new(180, 100, 50, 255);
const PAD_PURPLE: Rgb = Rgb::new(128, 0, 128);
const PAD_EDGE: Rgb = Rgb::new(90, 0, 90);
const HEART_PINK: Rgba = Rgba::new(255, 105, 140, 255);
const CHECK_GREEN: Rgba = Rgba::new(34, 180, 34, 255);
const RING_GRAY: Rgba = Rgba::new(200, 200, 200, 255);
const RIBBON_TAIL: Rgb = Rgb::new(184, 134, 11);
const RIBBON_TOP: Rgb = Rgb::new(255, 215, 0);
const RIBBON_BOTTOM: Rgb = Rgb::new(217, 183, 40);
const RIBBON_EDGE_TOP: Rgba = Rgba::new(255, 235, 100, 255);
const RIBBON_EDGE_BOTTOM: Rgba = Rgba::new(180, 130, 0, 255);
const RIBBON_SHADOW: Rgba = Rgba::new(120, 80, 0, 180);

const RAINBOW: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 200, 0),
    Rgb::new(0, 100, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(148, 0, 211),
];

const STAR_CX: i32 = SIZE / 2;
const STAR_CY: i32 = 480;
const STAR_OUTER: i32 = 155;
const STAR_INNER: i32 = 70;

pub(super) fn app_icon() -> Pipeline {
    Pipeline::new("icon", SIZE as u32, SIZE as u32, OutputMode::KeepAlpha)
        .step("sky gradient", |c, _| {
            draw::vertical_gradient(c, Box2::new(0, 0, SIZE, SIZE), SKY_TOP, SKY_BOTTOM);
            Ok(())
        })
        .step("rainbow arch", |c, _| {
            rainbow_arch(c);
            Ok(())
        })
        .step("headline", |c, ctx| {
            ctx.fonts.draw_centered_x_shadowed(
                c,
                SIZE / 2,
                28,
                HEADLINE,
                72.0,
                Rgba::WHITE,
                HEADLINE_SHADOW,
                (3, 3),
            );
            Ok(())
        })
        .step("star mascot", |c, _| {
            big_star(c);
            Ok(())
        })
        .step("stamp pad and heart", |c, _| {
            let (pad_x, pad_y) = (STAR_CX - 160, STAR_CY - 30);
            let (pad_w, pad_h) = (55, 70);
            shapes::stamp_pad(c, pad_x, pad_y, pad_w, pad_h, PAD_PURPLE, PAD_EDGE);
            shapes::heart(c, pad_x + pad_w / 2, pad_y - 30, 14, HEART_PINK);
            Ok(())
        })
        .step("stamp grid", |c, _| {
            stamp_rings(c);
            Ok(())
        })
        .step("reward ribbon", |c, ctx| {
            reward_ribbon(c, ctx);
            Ok(())
        })
        .step("corner mask", |c, _| {
            let mask = draw::rounded_rect_mask(
                c.width(),
                c.height(),
                Box2::new(0, 0, SIZE, SIZE),
                CORNER_RADIUS,
            );
            let mut framed = c.overlay();
            framed.composite_over(c, Some(&mask));
            *c = framed;
            Ok(())
        })
}

/// Seven contiguous bands, outermost red, each one stroke width thinner.
fn rainbow_arch(canvas: &mut Canvas) {
    let (cx, cy) = (SIZE / 2, 280);
    let thickness = 25;
    for (i, color) in RAINBOW.iter().enumerate() {
        let outer_r = 320 - i as i32 * thickness;
        draw::arc(
            canvas,
            Box2::around(cx, cy, outer_r),
            180.0,
            360.0,
            color.to_rgba(),
            thickness,
        );
    }
}

/// The mascot at icon scale: rimmed gold star, kawaii face, stubby legs
/// with shoes. Proportions here are fixed, unlike the scalable mascot in
/// the screenshot card.
fn big_star(canvas: &mut Canvas) {
    let (cx, cy) = (STAR_CX, STAR_CY);
    let (cxf, cyf) = (cx as f32, cy as f32);
    shapes::star_polygon(
        canvas,
        cxf,
        cyf,
        (STAR_OUTER + 4) as f32,
        (STAR_INNER + 2) as f32,
        5,
        GOLD_RIM.to_rgba(),
    );
    shapes::star_polygon(
        canvas,
        cxf,
        cyf,
        STAR_OUTER as f32,
        STAR_INNER as f32,
        5,
        GOLD.to_rgba(),
    );

    let eye_y = cy - 15;
    let eye_r = 12;
    for ex in [cx - 35, cx + 35] {
        draw::circle(canvas, ex, eye_y, eye_r, Style::fill(EYE_INK));
        let hl = Box2::new(
            ex - eye_r + 4,
            eye_y - eye_r + 2,
            ex - eye_r + 14,
            eye_y - eye_r + 12,
        );
        draw::ellipse(canvas, hl, Style::fill(Rgba::WHITE));
    }

    for chx in [cx - 60, cx + 60] {
        draw::circle(canvas, chx, cy + 15, 22, Style::fill(CHEEK));
    }

    draw::arc(
        canvas,
        Box2::new(cx - 40, cy + 20 - 25, cx + 40, cy + 20 + 25),
        10.0,
        170.0,
        SMILE,
        4,
    );

    let leg_top = cy + STAR_INNER + 40;
    let (leg_w, leg_h) = (18, 35);
    for lx in [cx - 30, cx + 30] {
        draw::rounded_rect(
            canvas,
            Box2::new(lx - leg_w, leg_top, lx + leg_w, leg_top + leg_h),
            Style::fill(GOLD.to_rgba())
                .with_outline(GOLD_RIM.to_rgba(), 2)
                .with_radius(10),
        );
    }
    let shoe_r = 12;
    for lx in [cx - 30, cx + 30] {
        draw::ellipse(
            canvas,
            Box2::new(
                lx - leg_w - 2,
                leg_top + leg_h - shoe_r,
                lx + leg_w + 2,
                leg_top + leg_h + shoe_r,
            ),
            Style::fill(SHOE),
        );
    }
}

/// 5x2 grid of ringed white discs, a green tick in the first one.
fn stamp_rings(canvas: &mut Canvas) {
    let grid_top = 660;
    let grid_left = 142;
    let r = 30;
    let spacing_x = (SIZE - 2 * grid_left - 2 * r) as f32 / 4.0;
    let spacing_y = 80;
    for row in 0..2 {
        for col in 0..5 {
            let cx = (grid_left + r) + (col as f32 * spacing_x) as i32;
            let cy = grid_top + r + row * spacing_y;
            draw::circle(canvas, cx, cy, r + 2, Style::fill(RING_GRAY));
            draw::circle(canvas, cx, cy, r, Style::fill(Rgba::WHITE));
            if row == 0 && col == 0 {
                shapes::checkmark(canvas, cx, cy, CHECK_GREEN, 6);
            }
        }
    }
}

fn reward_ribbon(canvas: &mut Canvas, ctx: &SceneContext) {
    let band = Box2::new(80, 880, SIZE - 80, 880 + 72);
    shapes::ribbon(canvas, band, 45, RIBBON_TOP, RIBBON_BOTTOM, RIBBON_TAIL);
    draw::line(canvas, band.x0, band.y0, band.x1, band.y0, RIBBON_EDGE_TOP, 2);
    draw::line(canvas, band.x0, band.y1, band.x1, band.y1, RIBBON_EDGE_BOTTOM, 2);

    let rh = ctx.fonts.measure(RIBBON_LABEL, 58.0).height();
    let ry = band.y0 + (band.height() - rh) / 2 - 4;
    ctx.fonts.draw_centered_x_shadowed(
        canvas,
        SIZE / 2,
        ry,
        RIBBON_LABEL,
        58.0,
        Rgba::WHITE,
        RIBBON_SHADOW,
        (2, 2),
    );
}
