//! The four 520x1120 app screenshots.
//!
//! `home`, `progress` and `settings` share the sky, header, card and
//! call-to-action layers; they differ in the stamp progress they show and
//! in what is layered on top. `reward` is its own celebration layout.

use crate::canvas::Canvas;
use crate::color::{Rgb, Rgba};
use crate::draw::{self, Style};
use crate::geom::Box2;
use crate::shapes;
use crate::theme::StampProgress;

use super::{layout, OutputMode, Pipeline, SceneContext};

const W: i32 = 520;
const H: i32 = 1120;

const CARD_Y: i32 = 140;
const CARD_H: i32 = 520;
const BUTTON_Y: i32 = CARD_Y + CARD_H + 20;
const BUTTON_H: i32 = 56;
const MODAL_H: i32 = 480;
const ACHIEVE_Y: i32 = H / 2 + 180;

const DIM_BLACK: Rgba = Rgba::new(0, 0, 0, 96);
const CARD_SHADOW: Rgba = Rgba::new(0, 0, 0, 25);
const WARM_BOTTOM: Rgb = Rgb::new(0xFF, 0xE8, 0xA3);
const TITLE_HALO: Rgba = Rgba::new(255, 255, 255, 180);

const BURST_COLORS: [Rgb; 5] = [
    Rgb::new(0xFF, 0xD7, 0x00),
    Rgb::new(0xFF, 0x6B, 0x6B),
    Rgb::new(0x5B, 0xC8, 0xF5),
    Rgb::new(0x7B, 0xC6, 0x7E),
    Rgb::new(0xFF, 0x9D, 0xD2),
];

const SPARKLE_SPOTS: [(i32, i32); 6] = [
    (80, 300),
    (W - 80, 350),
    (100, 550),
    (W - 100, 500),
    (60, 750),
    (W - 60, 700),
];

pub(super) fn home() -> Pipeline {
    Pipeline::new("home", W as u32, H as u32, OutputMode::Opaque(Rgb::WHITE))
        .step("sky and clouds", |c, ctx| {
            sky(c, ctx);
            Ok(())
        })
        .step("header", |c, ctx| {
            header(c, ctx, 0, true);
            Ok(())
        })
        .step("stamp card", |c, ctx| {
            let fresh = StampProgress::new(ctx.progress.goal(), 0);
            main_card(c, ctx, fresh);
            Ok(())
        })
        .step("stamp button", |c, ctx| {
            stamp_button(c, ctx);
            Ok(())
        })
        .step("remaining banner", |c, ctx| {
            remaining_banner(c, ctx, ctx.progress.goal(), BUTTON_Y + BUTTON_H + 16);
            Ok(())
        })
        .step("corner mascot", |c, ctx| {
            shapes::star_mascot(c, 45, H - 100, 30, ctx.theme.stamp_filled);
            Ok(())
        })
}

pub(super) fn progress() -> Pipeline {
    Pipeline::new("progress", W as u32, H as u32, OutputMode::Opaque(Rgb::WHITE))
        .step("sky and clouds", |c, ctx| {
            sky(c, ctx);
            Ok(())
        })
        .step("header", |c, ctx| {
            header(c, ctx, ctx.progress.earned(), true);
            Ok(())
        })
        .step("stamp card", |c, ctx| {
            main_card(c, ctx, ctx.progress);
            Ok(())
        })
        .step("stamp button", |c, ctx| {
            stamp_button(c, ctx);
            Ok(())
        })
        .step("remaining banner", |c, ctx| {
            remaining_banner(c, ctx, ctx.progress.remaining(), BUTTON_Y + BUTTON_H + 16);
            Ok(())
        })
        .step("corner mascot", |c, ctx| {
            shapes::star_mascot(c, 45, H - 100, 30, ctx.theme.stamp_filled);
            Ok(())
        })
        .step("stamp burst", |c, _| {
            shapes::particle_burst(c, 315, 420, &BURST_COLORS);
            Ok(())
        })
}

pub(super) fn settings() -> Pipeline {
    Pipeline::new("settings", W as u32, H as u32, OutputMode::Opaque(Rgb::WHITE))
        .step("sky and clouds", |c, ctx| {
            sky(c, ctx);
            Ok(())
        })
        .step("header", |c, ctx| {
            header(c, ctx, ctx.progress.earned(), true);
            Ok(())
        })
        .step("stamp card", |c, ctx| {
            main_card(c, ctx, ctx.progress);
            Ok(())
        })
        .step("stamp button", |c, ctx| {
            stamp_button(c, ctx);
            Ok(())
        })
        .step("dim overlay", |c, _| {
            let mut dim = c.overlay();
            draw::rect(&mut dim, Box2::new(0, 0, W, H), Style::fill(DIM_BLACK));
            c.composite_over(&dim, None);
            Ok(())
        })
        .step("settings sheet", |c, ctx| {
            settings_sheet(c, ctx);
            Ok(())
        })
}

pub(super) fn reward() -> Pipeline {
    Pipeline::new("reward", W as u32, H as u32, OutputMode::Opaque(Rgb::WHITE))
        .step("warm gradient", |c, ctx| {
            draw::vertical_gradient(c, Box2::new(0, 0, W, H), ctx.theme.bg_top, WARM_BOTTOM);
            Ok(())
        })
        .step("sun rays", |c, _| {
            shapes::sun_rays(c, W / 2, H / 3, 12);
            Ok(())
        })
        .step("confetti", |c, ctx| {
            shapes::confetti(c, &ctx.theme.confetti, 40, ctx.confetti_seed);
            Ok(())
        })
        .step("headline", |c, ctx| {
            let t = &ctx.theme;
            ctx.fonts.draw_centered_x_shadowed(
                c,
                W / 2,
                180,
                &ctx.strings.reward_title,
                64.0,
                t.secondary.to_rgba(),
                TITLE_HALO,
                (2, 2),
            );
            ctx.fonts.draw_centered_x(
                c,
                W / 2,
                270,
                &ctx.strings.reward_sub,
                20.0,
                t.text_dark.to_rgba(),
            );
            Ok(())
        })
        .step("puppy", |c, _| {
            shapes::puppy(c, W / 2, H / 2 + 20, 1.6);
            Ok(())
        })
        .step("achievement badge", |c, ctx| {
            achievement_badge(c, ctx);
            Ok(())
        })
        .step("home button", |c, ctx| {
            let rect = Box2::new(
                (W - 240) / 2,
                ACHIEVE_Y + 80,
                (W + 240) / 2,
                ACHIEVE_Y + 80 + BUTTON_H,
            );
            shapes::gradient_button(
                c,
                &ctx.fonts,
                rect,
                &ctx.strings.back_home,
                ctx.theme.primary,
                ctx.theme.orange,
                22.0,
            );
            Ok(())
        })
        .step("sparkles", |c, ctx| {
            for (sx, sy) in SPARKLE_SPOTS {
                shapes::sparkle(c, sx, sy, ctx.theme.stamp_filled);
            }
            Ok(())
        })
}

fn sky(canvas: &mut Canvas, ctx: &SceneContext) {
    let t = &ctx.theme;
    draw::vertical_gradient(canvas, Box2::new(0, 0, W, H), t.bg_top, t.bg_bottom);
    shapes::cloud(canvas, W - 130, 50, 0.9);
    shapes::cloud(canvas, -20, H - 200, 0.7);
}

fn header(canvas: &mut Canvas, ctx: &SceneContext, star_count: u32, show_settings: bool) {
    let y = 60;
    let t = &ctx.theme;
    let s = &ctx.strings;
    let ink = Rgba::new(0, 0, 0, 255);
    ctx.fonts.draw(canvas, 30, y, &s.star_icon, 20.0, ink);
    ctx.fonts.draw(
        canvas,
        55,
        y + 2,
        &star_count.to_string(),
        18.0,
        t.text_dark.to_rgba(),
    );
    if show_settings {
        ctx.fonts.draw(canvas, W - 120, y, &s.gear_icon, 20.0, ink);
        ctx.fonts.draw(
            canvas,
            W - 95,
            y + 4,
            &s.settings_label,
            14.0,
            t.text_light.to_rgba(),
        );
    }
}

/// Stamp card: drop shadow, rounded body, rainbow arch, task banner and
/// title, the slot grid, and the small mascot on the left edge.
fn main_card(canvas: &mut Canvas, ctx: &SceneContext, progress: StampProgress) {
    let t = &ctx.theme;
    let s = &ctx.strings;
    let card_w = W * 85 / 100;
    let card_x = (W - card_w) / 2;
    let card = Box2::new(card_x, CARD_Y, card_x + card_w, CARD_Y + CARD_H);
    let radius = card_w / 2;

    let mut shadow = canvas.overlay();
    draw::rounded_rect(
        &mut shadow,
        Box2::new(card.x0 + 3, card.y0 + 6, card.x1 - 3, card.y1),
        Style::fill(CARD_SHADOW).with_radius(radius),
    );
    canvas.composite_over(&shadow, None);

    draw::rounded_rect(
        canvas,
        card,
        Style::fill(t.surface.to_rgba()).with_radius(radius),
    );

    shapes::rainbow(canvas, W / 2, CARD_Y + 60, &t.rainbow);

    let bb = ctx.fonts.measure(&s.collect_banner, 14.0);
    let bw = bb.width() + 40;
    let bh = bb.height() + 12;
    let banner_x = (W - bw) / 2;
    let banner_y = CARD_Y + 90;
    draw::rounded_rect(
        canvas,
        Box2::new(banner_x, banner_y, banner_x + bw, banner_y + bh),
        Style::fill(t.pink_bg.to_rgba()).with_radius(15),
    );
    ctx.fonts.draw(
        canvas,
        banner_x + 20,
        banner_y + 4,
        &s.collect_banner,
        14.0,
        t.pink_text.to_rgba(),
    );

    ctx.fonts.draw_centered_x(
        canvas,
        W / 2,
        banner_y + bh + 6,
        &s.task_name,
        20.0,
        t.text_dark.to_rgba(),
    );

    let grid = layout::stamp_grid(progress.goal(), 4, card_w, W, banner_y + bh + 50);
    for (i, (cx, cy)) in grid.centers.iter().enumerate() {
        shapes::stamp_slot(
            canvas,
            *cx,
            *cy,
            grid.cell,
            progress.is_filled(i as u32),
            t.stamp_empty,
            t.stamp_filled,
        );
    }

    shapes::star_mascot(canvas, card_x + 35, CARD_Y + 250, 35, t.stamp_filled);
}

fn stamp_button(canvas: &mut Canvas, ctx: &SceneContext) {
    let rect = Box2::new((W - 280) / 2, BUTTON_Y, (W + 280) / 2, BUTTON_Y + BUTTON_H);
    shapes::gradient_button(
        canvas,
        &ctx.fonts,
        rect,
        &ctx.strings.get_stamp,
        ctx.theme.primary,
        ctx.theme.primary_dark,
        22.0,
    );
}

/// "N more until the reward" pill. The count is rendered larger and in
/// red between the two label halves.
fn remaining_banner(canvas: &mut Canvas, ctx: &SceneContext, remaining: u32, y: i32) {
    let t = &ctx.theme;
    let s = &ctx.strings;
    let num = remaining.to_string();
    let b1 = ctx.fonts.measure(&s.remaining_before, 16.0);
    let b2 = ctx.fonts.measure(&num, 20.0);
    let b3 = ctx.fonts.measure(&s.remaining_after, 16.0);
    let total_w = b1.width() + b2.width() + b3.width() + 48;
    let bh = 40;
    let bx = (W - total_w) / 2;

    draw::rounded_rect(
        canvas,
        Box2::new(bx, y, bx + total_w, y + bh),
        Style::fill(t.surface.with_alpha(238)).with_radius(20),
    );

    let mut cur_x = bx + 24;
    ctx.fonts.draw(canvas, cur_x, y + 8, &s.remaining_before, 16.0, t.text_dark.to_rgba());
    cur_x += b1.width();
    ctx.fonts.draw(canvas, cur_x, y + 5, &num, 20.0, t.red.to_rgba());
    cur_x += b2.width();
    ctx.fonts.draw(canvas, cur_x, y + 8, &s.remaining_after, 16.0, t.text_dark.to_rgba());
}

/// Bottom sheet: drag handle, title, goal picker grid (3..=12, five per
/// row, the current goal highlighted), undo row, close button.
fn settings_sheet(canvas: &mut Canvas, ctx: &SceneContext) {
    let t = &ctx.theme;
    let s = &ctx.strings;
    let modal_y = H - MODAL_H;

    draw::rounded_rect(
        canvas,
        Box2::new(0, modal_y, W, H),
        Style::fill(t.surface.to_rgba()).with_radius(24),
    );
    draw::rounded_rect(
        canvas,
        Box2::new((W - 40) / 2, modal_y + 12, (W + 40) / 2, modal_y + 16),
        Style::fill(Rgba::new(0xCC, 0xCC, 0xCC, 255)).with_radius(2),
    );

    ctx.fonts.draw_centered_x(
        canvas,
        W / 2,
        modal_y + 30,
        &s.settings_title,
        22.0,
        t.text_dark.to_rgba(),
    );
    ctx.fonts.draw(
        canvas,
        30,
        modal_y + 75,
        &s.stamp_count_label,
        16.0,
        t.text_light.to_rgba(),
    );

    let btn_w = 52;
    let btn_h = 44;
    let gap = 10;
    let cols = 5;
    let grid_w = cols * btn_w + (cols - 1) * gap;
    let grid_x = (W - grid_w) / 2;
    let grid_y = modal_y + 110;
    for (idx, goal) in (3u32..=12).enumerate() {
        let col = idx as i32 % cols;
        let row = idx as i32 / cols;
        let bx = grid_x + col * (btn_w + gap);
        let by = grid_y + row * (btn_h + gap);
        let active = goal == ctx.progress.goal();
        let (bg, ink) = if active {
            (t.orange.to_rgba(), Rgba::WHITE)
        } else {
            (
                Rgba::new(0xF0, 0xF0, 0xF0, 255),
                Rgba::new(0x55, 0x55, 0x55, 255),
            )
        };
        let cell = Box2::new(bx, by, bx + btn_w, by + btn_h);
        draw::rounded_rect(canvas, cell, Style::fill(bg).with_radius(12));
        ctx.fonts
            .draw_centered(canvas, cell, &goal.to_string(), 18.0, ink);
    }

    let undo_y = grid_y + 2 * (btn_h + gap) + 20;
    draw::rounded_rect(
        canvas,
        Box2::new(24, undo_y, W - 24, undo_y + 50),
        Style::fill(Rgba::new(0xFF, 0xF0, 0xF0, 255)).with_radius(14),
    );
    ctx.fonts
        .draw_centered_x(canvas, W / 2, undo_y + 14, &s.undo_label, 16.0, t.red.to_rgba());

    let close_y = undo_y + 50 + 16;
    draw::rounded_rect(
        canvas,
        Box2::new(24, close_y, W - 24, close_y + 50),
        Style::fill(t.primary.to_rgba()).with_radius(14),
    );
    ctx.fonts
        .draw_centered_x(canvas, W / 2, close_y + 14, &s.close_label, 16.0, Rgba::WHITE);
}

fn achievement_badge(canvas: &mut Canvas, ctx: &SceneContext) {
    let t = &ctx.theme;
    let s = &ctx.strings;
    let label = format!(
        "{}{}{}",
        s.achievement_before,
        ctx.progress.goal(),
        s.achievement_after
    );
    let badge_w = ctx.fonts.measure(&label, 18.0).width() + 40;
    draw::rounded_rect(
        canvas,
        Box2::new((W - badge_w) / 2, ACHIEVE_Y, (W + badge_w) / 2, ACHIEVE_Y + 40),
        Style::fill(t.stamp_filled.with_alpha(230)).with_radius(20),
    );
    ctx.fonts
        .draw_centered_x(canvas, W / 2, ACHIEVE_Y + 8, &label, 18.0, Rgba::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontStack;

    fn ctx() -> SceneContext {
        SceneContext::new(FontStack::bitmap_only())
    }

    /// Slot centers as the card draws them, derived from the same metrics.
    fn slot_centers(ctx: &SceneContext) -> Vec<(i32, i32)> {
        let bb = ctx.fonts.measure(&ctx.strings.collect_banner, 14.0);
        let banner_y = CARD_Y + 90;
        let grid_y = banner_y + (bb.height() + 12) + 50;
        layout::stamp_grid(ctx.progress.goal(), 4, W * 85 / 100, W, grid_y).centers
    }

    #[test]
    fn progress_scene_fills_exactly_the_earned_prefix() {
        let context = ctx();
        let canvas = progress().render(&context).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (520, 1120));

        let gold = ctx().theme.stamp_filled.to_rgba();
        let base = Rgba::new(240, 249, 255, 255);
        for (i, (cx, cy)) in slot_centers(&context).iter().enumerate() {
            // the newest stamp wears the particle burst; its dots can land
            // on the slot center
            let (dx, dy) = (cx - 315, cy - 420);
            if dx * dx + dy * dy <= 31 * 31 {
                continue;
            }
            let got = canvas.pixel(*cx as u32, *cy as u32).unwrap();
            if (i as u32) < context.progress.earned() {
                assert_eq!(got, gold, "slot {} should be filled", i);
            } else {
                assert_eq!(got, base, "slot {} should be empty", i);
            }
        }
    }

    #[test]
    fn progress_banner_shows_the_remaining_count_in_red() {
        let context = ctx();
        assert_eq!(context.progress.remaining(), 5);
        let canvas = progress().render(&context).unwrap();

        let red = context.theme.red.to_rgba();
        let y0 = (BUTTON_Y + BUTTON_H + 16) as u32;
        let mut red_pixels = 0;
        for y in y0..y0 + 40 {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(red) {
                    red_pixels += 1;
                }
            }
        }
        assert!(red_pixels > 0, "count digit should render in red");
    }

    #[test]
    fn home_scene_has_no_filled_slots() {
        let context = ctx();
        let canvas = home().render(&context).unwrap();
        let base = Rgba::new(240, 249, 255, 255);
        for (cx, cy) in slot_centers(&context) {
            assert_eq!(canvas.pixel(cx as u32, cy as u32), Some(base));
        }
    }

    #[test]
    fn settings_sheet_highlights_the_active_goal() {
        let context = ctx();
        let canvas = settings().render(&context).unwrap();

        let modal_y = H - MODAL_H;
        let grid_x = (W - (5 * 52 + 4 * 10)) / 2;
        let grid_y = modal_y + 110;
        // Goal 12 sits at column 4, row 1; goal 3 at column 0, row 0. Both
        // sampled near the corner, away from the digit ink.
        let active = canvas
            .pixel((grid_x + 4 * 62 + 4) as u32, (grid_y + 54 + 4) as u32)
            .unwrap();
        let idle = canvas
            .pixel((grid_x + 4) as u32, (grid_y + 4) as u32)
            .unwrap();
        assert_eq!(active, context.theme.orange.to_rgba());
        assert_eq!(idle, Rgba::new(0xF0, 0xF0, 0xF0, 255));
    }

    #[test]
    fn settings_dims_the_scene_behind_the_sheet() {
        let context = ctx();
        let lit = progress().render(&context).unwrap();
        let dimmed = settings().render(&context).unwrap();
        // A sky pixel above the modal is strictly darker once dimmed.
        let (x, y) = (10u32, 20u32);
        let before = lit.pixel(x, y).unwrap();
        let after = dimmed.pixel(x, y).unwrap();
        assert!(after.r < before.r && after.g < before.g && after.b < before.b);
    }

    #[test]
    fn reward_confetti_repeats_with_the_same_seed() {
        let context = ctx();
        let a = reward().render(&context).unwrap();
        let b = reward().render(&context).unwrap();
        for y in (0..H as u32).step_by(97) {
            for x in (0..W as u32).step_by(41) {
                assert_eq!(a.pixel(x, y), b.pixel(x, y));
            }
        }
    }
}
