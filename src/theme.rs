//! Palettes and fixed UI copy shared by every scene.
//!
//! A [`Theme`] is an immutable color bundle. Five built-ins ship with the
//! crate and alternate palettes deserialize from JSON at the CLI boundary;
//! any field missing from the JSON falls back to the default palette.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Color palette for one render run.
///
/// ```
/// use stampshot::theme::Theme;
///
/// let theme = Theme::by_name("space").unwrap();
/// assert!(theme.dark_mode);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Palette name, as accepted by [`Theme::by_name`].
    pub name: String,
    /// Primary action color: buttons, the splash title.
    pub primary: Rgb,
    /// Darker stop for primary gradients.
    pub primary_dark: Rgb,
    /// Headline color on celebration screens.
    pub secondary: Rgb,
    /// Highlight color; the promo tagline is drawn in it.
    pub accent: Rgb,
    pub accent_dark: Rgb,
    /// Background gradient stops, top and bottom.
    pub bg_top: Rgb,
    pub bg_bottom: Rgb,
    /// Card, modal and phone-frame surface color.
    pub surface: Rgb,
    pub text_dark: Rgb,
    pub text_light: Rgb,
    pub stamp_empty: Rgb,
    pub stamp_filled: Rgb,
    pub success: Rgb,
    pub pink_bg: Rgb,
    pub pink_text: Rgb,
    pub red: Rgb,
    pub orange: Rgb,
    /// Arch band colors, outermost band first.
    pub rainbow: Vec<Rgb>,
    /// Confetti piece colors, picked per piece by the seeded generator.
    pub confetti: Vec<Rgb>,
    /// True for palettes with dark backgrounds; promo frames invert.
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            name: "default".to_string(),
            primary: Rgb::new(0x5B, 0xC8, 0xF5),
            primary_dark: Rgb::new(0x4A, 0xB8, 0xE5),
            secondary: Rgb::new(0xFF, 0x9D, 0xD2),
            accent: Rgb::new(0xFF, 0xE6, 0x6D),
            accent_dark: Rgb::new(0xFF, 0xD9, 0x3D),
            bg_top: Rgb::new(0x87, 0xCE, 0xEB),
            bg_bottom: Rgb::new(0xC8, 0xE6, 0xF5),
            surface: Rgb::WHITE,
            text_dark: Rgb::new(0x2D, 0x34, 0x36),
            text_light: Rgb::new(0x63, 0x6E, 0x72),
            stamp_empty: Rgb::new(0xB8, 0xE4, 0xF9),
            stamp_filled: Rgb::new(0xFF, 0xD7, 0x00),
            success: Rgb::new(0x4C, 0xAF, 0x50),
            pink_bg: Rgb::new(0xFF, 0xE0, 0xEE),
            pink_text: Rgb::new(0xE9, 0x1E, 0x8C),
            red: Rgb::new(0xFF, 0x3B, 0x30),
            orange: Rgb::new(0xFF, 0xA5, 0x59),
            rainbow: vec![
                Rgb::new(0xFF, 0x6B, 0x6B),
                Rgb::new(0xFF, 0xA5, 0x59),
                Rgb::new(0xFF, 0xE6, 0x6D),
                Rgb::new(0x7B, 0xC6, 0x7E),
                Rgb::new(0x5B, 0xC8, 0xF5),
                Rgb::new(0x7B, 0x68, 0xEE),
                Rgb::new(0xBA, 0x68, 0xC8),
            ],
            confetti: vec![
                Rgb::new(0xFF, 0x9D, 0xD2),
                Rgb::new(0x5B, 0xC8, 0xF5),
                Rgb::new(0xFF, 0xE6, 0x6D),
                Rgb::new(0xFF, 0xA5, 0x59),
                Rgb::new(0x7B, 0xC6, 0x7E),
                Rgb::new(0xBA, 0x68, 0xC8),
            ],
            dark_mode: false,
        }
    }
}

impl Theme {
    /// Built-in palette names, in listing order.
    pub const BUILTIN_NAMES: [&'static str; 5] =
        ["default", "animals", "vehicles", "space", "wagara"];

    /// Looks up a built-in palette. `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "default" => Some(Theme::default()),
            "animals" => Some(Theme::animals()),
            "vehicles" => Some(Theme::vehicles()),
            "space" => Some(Theme::space()),
            "wagara" => Some(Theme::wagara()),
            _ => None,
        }
    }

    fn variant(name: &str, bg_top: Rgb, bg_bottom: Rgb, primary: Rgb, surface: Rgb) -> Theme {
        Theme {
            name: name.to_string(),
            primary,
            primary_dark: primary.lerp(Rgb::BLACK, 0.15),
            bg_top,
            bg_bottom,
            surface,
            ..Theme::default()
        }
    }

    /// Warm amber palette.
    pub fn animals() -> Theme {
        Theme::variant(
            "animals",
            Rgb::new(0xFF, 0xF8, 0xE1),
            Rgb::new(0xFF, 0xE0, 0xB2),
            Rgb::new(0xFF, 0x8F, 0x00),
            Rgb::new(0xFF, 0xFD, 0xE7),
        )
    }

    /// Cool blue palette.
    pub fn vehicles() -> Theme {
        Theme::variant(
            "vehicles",
            Rgb::new(0xE3, 0xF2, 0xFD),
            Rgb::new(0xBB, 0xDE, 0xFB),
            Rgb::new(0x19, 0x76, 0xD2),
            Rgb::new(0xF8, 0xFB, 0xFF),
        )
    }

    /// Dark violet palette; the only built-in with `dark_mode` set.
    pub fn space() -> Theme {
        Theme {
            dark_mode: true,
            ..Theme::variant(
                "space",
                Rgb::new(0x1A, 0x1A, 0x2E),
                Rgb::new(0x16, 0x21, 0x3E),
                Rgb::new(0xA8, 0x55, 0xF7),
                Rgb::new(0x1E, 0x1E, 0x3A),
            )
        }
    }

    /// Soft pink palette.
    pub fn wagara() -> Theme {
        Theme::variant(
            "wagara",
            Rgb::new(0xFF, 0xF0, 0xF5),
            Rgb::new(0xFC, 0xE4, 0xEC),
            Rgb::new(0xE9, 0x1E, 0x8C),
            Rgb::new(0xFF, 0xF9, 0xFB),
        )
    }

    /// Warm paper palette used by the splash and promo scenes.
    pub fn warm_daily() -> Theme {
        Theme {
            name: "warm-daily".to_string(),
            primary: Rgb::new(0xF9, 0x73, 0x16),
            primary_dark: Rgb::new(0xF9, 0x73, 0x16).lerp(Rgb::BLACK, 0.15),
            accent: Rgb::new(0xF5, 0x9E, 0x0B),
            bg_top: Rgb::new(0xFF, 0xFB, 0xEB),
            bg_bottom: Rgb::new(0xFE, 0xF3, 0xC7),
            text_dark: Rgb::new(0x29, 0x25, 0x24),
            ..Theme::default()
        }
    }
}

/// Fixed UI copy. One bundle per render run, Japanese by default.
#[derive(Debug, Clone)]
pub struct Strings {
    pub app_name: String,
    pub star_icon: String,
    pub gear_icon: String,
    pub settings_label: String,
    pub collect_banner: String,
    pub task_name: String,
    pub get_stamp: String,
    /// Remaining-count banner reads `{before}{count}{after}`.
    pub remaining_before: String,
    pub remaining_after: String,
    pub settings_title: String,
    pub stamp_count_label: String,
    pub undo_label: String,
    pub close_label: String,
    pub reward_title: String,
    pub reward_sub: String,
    /// Achievement badge reads `{before}{goal}{after}`.
    pub achievement_before: String,
    pub achievement_after: String,
    pub back_home: String,
    /// Promo captions, one per promo scene.
    pub captions: Vec<String>,
    pub tagline: String,
}

impl Default for Strings {
    fn default() -> Self {
        Strings {
            app_name: "スタンプカードアプリ".to_string(),
            star_icon: "⭐".to_string(),
            gear_icon: "⚙️".to_string(),
            settings_label: "せってい".to_string(),
            collect_banner: "すたんぷをあつめよう".to_string(),
            task_name: "おてつだいをする".to_string(),
            get_stamp: "スタンプをゲット！".to_string(),
            remaining_before: "ごほうびまであと".to_string(),
            remaining_after: "こ！".to_string(),
            settings_title: "⚙️ せってい".to_string(),
            stamp_count_label: "スタンプのかず".to_string(),
            undo_label: "↩️ スタンプを1こもどす".to_string(),
            close_label: "とじる".to_string(),
            reward_title: "ごほうび！".to_string(),
            reward_sub: "よくがんばったね！".to_string(),
            achievement_before: "スタンプ ".to_string(),
            achievement_after: "こ たっせい！".to_string(),
            back_home: "🏠 もどる".to_string(),
            captions: vec![
                "今日やることがひと目でわかる".to_string(),
                "家族みんなで使えるシンプル設計".to_string(),
                "習慣づけを楽しくサポート".to_string(),
                "生活をスマートに整理しよう".to_string(),
            ],
            tagline: "毎日をもっとかんたん、もっと楽しく。".to_string(),
        }
    }
}

/// Stamp card progress. Filled slots always form a prefix: slot `i` is
/// filled exactly when `i < earned()`, so a scene cannot render a card
/// with holes in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampProgress {
    goal: u32,
    earned: u32,
}

impl StampProgress {
    /// Clamps `goal` to at least 1 and `earned` into `0..=goal`.
    pub fn new(goal: u32, earned: u32) -> StampProgress {
        let goal = goal.max(1);
        StampProgress {
            goal,
            earned: earned.min(goal),
        }
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn earned(&self) -> u32 {
        self.earned
    }

    pub fn remaining(&self) -> u32 {
        self.goal - self.earned
    }

    /// Whether slot `index` (0-based) shows a collected stamp.
    pub fn is_filled(&self, index: u32) -> bool {
        index < self.earned
    }
}

impl Default for StampProgress {
    fn default() -> Self {
        StampProgress::new(12, 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_app_constants() {
        let t = Theme::default();
        assert_eq!(t.primary, Rgb::new(0x5B, 0xC8, 0xF5));
        assert_eq!(t.stamp_filled, Rgb::new(0xFF, 0xD7, 0x00));
        assert_eq!(t.rainbow.len(), 7);
        assert_eq!(t.confetti.len(), 6);
        assert!(!t.dark_mode);
    }

    #[test]
    fn builtin_lookup_covers_every_name() {
        for name in Theme::BUILTIN_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::by_name("sepia").is_none());
    }

    #[test]
    fn space_is_the_only_dark_builtin() {
        let dark: Vec<&str> = Theme::BUILTIN_NAMES
            .iter()
            .filter(|n| Theme::by_name(n).unwrap().dark_mode)
            .copied()
            .collect();
        assert_eq!(dark, vec!["space"]);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"primary": "#112233"}"##).unwrap();
        assert_eq!(theme.primary, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(theme.bg_top, Theme::default().bg_top);
        assert_eq!(theme.rainbow.len(), 7);
    }

    #[test]
    fn theme_round_trips_through_json() {
        let before = Theme::wagara();
        let json = serde_json::to_string(&before).unwrap();
        let after: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(after.name, "wagara");
        assert_eq!(after.primary, before.primary);
        assert_eq!(after.bg_bottom, before.bg_bottom);
    }

    #[test]
    fn progress_clamps_and_fills_a_prefix() {
        let p = StampProgress::new(12, 20);
        assert_eq!(p.earned(), 12);
        assert_eq!(p.remaining(), 0);

        let p = StampProgress::new(0, 3);
        assert_eq!(p.goal(), 1);

        let p = StampProgress::new(12, 7);
        for i in 0..12 {
            assert_eq!(p.is_filled(i), i < 7);
        }
        assert_eq!(p.remaining(), 5);
    }
}
