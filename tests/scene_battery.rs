use stampshot::{
    pipeline, FontStack, OutputMode, Rgb, Rgba, SceneContext, StampProgress, Theme, SCENE_NAMES,
};

fn bitmap_ctx() -> SceneContext {
    SceneContext::new(FontStack::bitmap_only())
}

#[test]
fn battery_covers_the_store_checklist() {
    let expected: &[(&str, u32, u32)] = &[
        ("home", 520, 1120),
        ("progress", 520, 1120),
        ("settings", 520, 1120),
        ("reward", 520, 1120),
        ("icon", 1024, 1024),
        ("splash", 1284, 2778),
        ("promo-01", 1284, 2778),
        ("promo-02", 1284, 2778),
        ("promo-03", 1284, 2778),
        ("promo-04", 1284, 2778),
    ];
    assert_eq!(SCENE_NAMES.len(), expected.len());
    for (name, w, h) in expected {
        let scene = pipeline(name).expect("listed scene");
        assert_eq!((scene.width(), scene.height()), (*w, *h), "{name}");
    }
}

#[test]
fn only_the_icon_keeps_its_alpha_channel() {
    for name in SCENE_NAMES {
        let scene = pipeline(name).expect("listed scene");
        let keeps = scene.mode() == OutputMode::KeepAlpha;
        assert_eq!(keeps, name == "icon", "{name}");
    }
}

#[test]
fn more_earned_stamps_mean_more_gold_ink() {
    fn gold_pixels(ctx: &SceneContext) -> usize {
        let canvas = pipeline("progress").expect("scene").render(ctx).expect("render");
        let gold = ctx.theme.stamp_filled.to_rgba();
        let mut n = 0;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(gold) {
                    n += 1;
                }
            }
        }
        n
    }

    let mut ctx = bitmap_ctx();
    ctx.progress = StampProgress::new(12, 1);
    let few = gold_pixels(&ctx);
    ctx.progress = StampProgress::new(12, 9);
    let many = gold_pixels(&ctx);
    assert!(few > 0);
    assert!(few < many, "expected more filled stars at 9/12 than 1/12");
}

#[test]
fn themes_change_the_sky() {
    let mut ctx = bitmap_ctx();
    let default_sky = pipeline("home")
        .expect("scene")
        .render(&ctx)
        .expect("render")
        .pixel(10, 0)
        .expect("pixel");

    ctx.theme = Theme::by_name("space").expect("builtin");
    let space_sky = pipeline("home")
        .expect("scene")
        .render(&ctx)
        .expect("render")
        .pixel(10, 0)
        .expect("pixel");

    assert_ne!(default_sky, space_sky);
    // Row zero of the gradient is exactly the theme's top color.
    assert_eq!(space_sky, Rgba::new(0x1A, 0x1A, 0x2E, 255));
}

#[test]
fn confetti_seed_reshuffles_the_reward_scene_only() {
    let mut ctx = bitmap_ctx();
    let reward_a = pipeline("reward").expect("scene").render_png(&ctx).expect("render");
    let home_a = pipeline("home").expect("scene").render_png(&ctx).expect("render");

    ctx.confetti_seed = 7;
    let reward_b = pipeline("reward").expect("scene").render_png(&ctx).expect("render");
    let home_b = pipeline("home").expect("scene").render_png(&ctx).expect("render");

    assert_ne!(reward_a, reward_b, "confetti should move with the seed");
    assert_eq!(home_a, home_b, "home has no seeded content");
}

#[test]
fn partial_theme_json_fills_in_defaults() {
    let theme: Theme = serde_json::from_str(r##"{"name":"mint","primary":"#00C896"}"##)
        .expect("partial theme parses");
    assert_eq!(theme.name, "mint");
    assert_eq!(theme.primary, Rgb::new(0x00, 0xC8, 0x96));
    assert_eq!(theme.surface, Theme::default().surface);
    assert!(!theme.dark_mode);
}
