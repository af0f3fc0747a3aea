//! 1284x2778 store artwork: the splash screen and the four promo frames.
//!
//! These render from the separate branding palette in the context, not the
//! app palette, and flip to dark frame colors when that palette is dark.

use crate::color::{Rgb, Rgba};
use crate::draw::{self, Style};
use crate::geom::Box2;

use super::{OutputMode, Pipeline, SceneContext};

const W: i32 = 1284;
const H: i32 = 2778;

const SPLASH_TITLE_Y: i32 = 1300;
const CAPTION_Y: i32 = 200;
const TAGLINE_Y: i32 = 2550;

const FRAME_X: i32 = 142;
const FRAME_Y: i32 = 600;
const FRAME_W: i32 = 1000;
const FRAME_H: i32 = 1800;

const LIGHT_FRAME_EDGE: Rgba = Rgba::new(200, 200, 200, 255);
const DARK_FRAME: Rgba = Rgba::new(30, 30, 50, 255);
const DARK_FRAME_EDGE: Rgba = Rgba::new(80, 80, 120, 255);

const PROMO_NAMES: [&str; 4] = ["promo-01", "promo-02", "promo-03", "promo-04"];

pub(super) fn splash() -> Pipeline {
    Pipeline::new("splash", W as u32, H as u32, OutputMode::Opaque(Rgb::WHITE))
        .step("brand gradient", |c, ctx| {
            draw::vertical_gradient(
                c,
                Box2::new(0, 0, W, H),
                ctx.brand.bg_top,
                ctx.brand.bg_bottom,
            );
            Ok(())
        })
        .step("app title", |c, ctx| {
            ctx.fonts.draw_centered_x(
                c,
                W / 2,
                SPLASH_TITLE_Y,
                &ctx.strings.app_name,
                80.0,
                ctx.brand.primary.to_rgba(),
            );
            Ok(())
        })
}

/// Promo frame `index` (0-based): gradient, phone mock, one caption, the
/// shared tagline.
pub(super) fn promo(index: usize) -> Pipeline {
    Pipeline::new(
        PROMO_NAMES[index],
        W as u32,
        H as u32,
        OutputMode::Opaque(Rgb::WHITE),
    )
    .step("brand gradient", |c, ctx| {
        draw::vertical_gradient(
            c,
            Box2::new(0, 0, W, H),
            ctx.brand.bg_top,
            ctx.brand.bg_bottom,
        );
        Ok(())
    })
    .step("phone frame", |c, ctx| {
        let b = &ctx.brand;
        let (fill, edge) = if b.dark_mode {
            (DARK_FRAME, DARK_FRAME_EDGE)
        } else {
            (b.surface.to_rgba(), LIGHT_FRAME_EDGE)
        };
        draw::rounded_rect(
            c,
            Box2::new(FRAME_X, FRAME_Y, FRAME_X + FRAME_W, FRAME_Y + FRAME_H),
            Style::fill(fill).with_outline(edge, 3).with_radius(40),
        );
        Ok(())
    })
    .step("caption", move |c, ctx| {
        if let Some(caption) = ctx.strings.captions.get(index) {
            let ink = if ctx.brand.dark_mode {
                Rgba::WHITE
            } else {
                ctx.brand.text_dark.to_rgba()
            };
            ctx.fonts.draw_centered_x(c, W / 2, CAPTION_Y, caption, 64.0, ink);
        }
        Ok(())
    })
    .step("tagline", |c, ctx| {
        ctx.fonts.draw_centered_x(
            c,
            W / 2,
            TAGLINE_Y,
            &ctx.strings.tagline,
            36.0,
            ctx.brand.accent.to_rgba(),
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontStack;
    use crate::theme::Theme;

    fn ctx() -> SceneContext {
        SceneContext::new(FontStack::bitmap_only())
    }

    fn count_in_rows(canvas: &crate::canvas::Canvas, y0: u32, y1: u32, want: Rgba) -> usize {
        let mut n = 0;
        for y in y0..y1 {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(want) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn splash_title_renders_in_the_brand_primary() {
        let context = ctx();
        let canvas = splash().render(&context).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1284, 2778));
        let primary = context.brand.primary.to_rgba();
        let hits = count_in_rows(&canvas, 1300, 1400, primary);
        assert!(hits > 0, "title ink missing");
    }

    #[test]
    fn promo_frame_is_light_on_the_default_brand() {
        let context = ctx();
        let canvas = promo(0).render(&context).unwrap();
        let inside = canvas.pixel(642, 1500).unwrap();
        assert_eq!(inside, context.brand.surface.to_rgba());
        let edge = canvas.pixel(FRAME_X as u32, 1500).unwrap();
        assert_eq!(edge, LIGHT_FRAME_EDGE);
    }

    #[test]
    fn promo_frame_flips_for_a_dark_brand() {
        let mut context = ctx();
        context.brand = Theme::space();
        let canvas = promo(2).render(&context).unwrap();
        assert_eq!(canvas.pixel(642, 1500).unwrap(), DARK_FRAME);
        assert_eq!(canvas.pixel(FRAME_X as u32, 1500).unwrap(), DARK_FRAME_EDGE);
    }

    #[test]
    fn each_promo_gets_its_own_caption() {
        let context = ctx();
        // Captions differ in length, so the ink extents differ per scene.
        let a = promo(0).render(&context).unwrap();
        let b = promo(1).render(&context).unwrap();
        let ink = context.brand.text_dark.to_rgba();
        let wa = count_in_rows(&a, 200, 280, ink);
        let wb = count_in_rows(&b, 200, 280, ink);
        assert!(wa > 0 && wb > 0);
        assert_ne!(wa, wb);
    }

    #[test]
    fn tagline_is_drawn_in_the_accent_color() {
        let context = ctx();
        let canvas = promo(3).render(&context).unwrap();
        let accent = context.brand.accent.to_rgba();
        assert!(count_in_rows(&canvas, 2550, 2600, accent) > 0);
    }
}
