//! The scene battery: named pipelines that each produce one finished image.
//!
//! A [`Pipeline`] is a declared name, canvas size and output mode plus an
//! ordered list of layer steps. Steps only read the [`SceneContext`] they
//! are handed; nothing in here touches globals or does I/O, so the same
//! pipeline renders byte-identically as often as it is run.

mod branding;
mod icon;
mod layout;
mod screens;

pub use layout::{stamp_grid, StampGrid};

use std::io::Cursor;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::text::FontStack;
use crate::theme::{StampProgress, Strings, Theme};

/// Seed for the reward-screen confetti field.
pub const CONFETTI_SEED: u32 = 42;

/// Everything a scene reads while drawing. Built once per run.
pub struct SceneContext {
    /// Palette for the app screenshots and the icon.
    pub theme: Theme,
    /// Palette for the splash and promo frames.
    pub brand: Theme,
    pub strings: Strings,
    /// Card state featured by the `progress` and `settings` scenes. The
    /// `home` scene shows the same goal with nothing earned yet, and the
    /// `reward` scene shows it completed.
    pub progress: StampProgress,
    pub fonts: FontStack,
    pub confetti_seed: u32,
}

impl SceneContext {
    pub fn new(fonts: FontStack) -> Self {
        SceneContext {
            theme: Theme::default(),
            brand: Theme::warm_daily(),
            strings: Strings::default(),
            progress: StampProgress::default(),
            fonts,
            confetti_seed: CONFETTI_SEED,
        }
    }
}

/// What happens to the alpha channel when a scene is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Flatten over a solid background; the PNG is RGB.
    Opaque(Rgb),
    /// Encode the RGBA canvas as drawn. Only the app icon keeps
    /// transparency, for its rounded corners.
    KeepAlpha,
}

type Step = Box<dyn Fn(&mut Canvas, &SceneContext) -> Result<()>>;

/// One scene: a named, ordered composition.
pub struct Pipeline {
    name: &'static str,
    width: u32,
    height: u32,
    mode: OutputMode,
    steps: Vec<(&'static str, Step)>,
}

impl Pipeline {
    fn new(name: &'static str, width: u32, height: u32, mode: OutputMode) -> Self {
        Pipeline {
            name,
            width,
            height,
            mode,
            steps: Vec::new(),
        }
    }

    fn step<F>(mut self, label: &'static str, f: F) -> Self
    where
        F: Fn(&mut Canvas, &SceneContext) -> Result<()> + 'static,
    {
        self.steps.push((label, Box::new(f)));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Run every step in order on a fresh canvas. Dimension problems are
    /// reported before any drawing happens.
    pub fn render(&self, ctx: &SceneContext) -> Result<Canvas> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension(format!(
                "scene {} declares a {}x{} canvas",
                self.name, self.width, self.height
            )));
        }
        let mut canvas = Canvas::transparent(self.width, self.height)?;
        for (label, step) in &self.steps {
            log::debug!("{}: {}", self.name, label);
            step(&mut canvas, ctx)?;
        }
        Ok(canvas)
    }

    /// Render, then encode as PNG bytes. RGB for opaque scenes, RGBA when
    /// the alpha channel is kept.
    pub fn render_png(&self, ctx: &SceneContext) -> Result<Vec<u8>> {
        let canvas = self.render(ctx)?;
        let mut out = Cursor::new(Vec::new());
        match self.mode {
            OutputMode::Opaque(background) => canvas
                .flatten_to_opaque(background)
                .write_to(&mut out, image::ImageFormat::Png)?,
            OutputMode::KeepAlpha => canvas
                .as_image()
                .write_to(&mut out, image::ImageFormat::Png)?,
        }
        Ok(out.into_inner())
    }
}

/// Scene names the CLI accepts, in listing order.
pub const SCENE_NAMES: [&str; 10] = [
    "home", "progress", "settings", "reward", "icon", "splash", "promo-01", "promo-02", "promo-03",
    "promo-04",
];

/// Look up a scene pipeline by its CLI name.
pub fn pipeline(name: &str) -> Option<Pipeline> {
    match name {
        "home" => Some(screens::home()),
        "progress" => Some(screens::progress()),
        "settings" => Some(screens::settings()),
        "reward" => Some(screens::reward()),
        "icon" => Some(icon::app_icon()),
        "splash" => Some(branding::splash()),
        "promo-01" => Some(branding::promo(0)),
        "promo-02" => Some(branding::promo(1)),
        "promo-03" => Some(branding::promo(2)),
        "promo-04" => Some(branding::promo(3)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SceneContext {
        SceneContext::new(FontStack::bitmap_only())
    }

    #[test]
    fn every_listed_scene_has_a_pipeline() {
        for name in SCENE_NAMES {
            let p = pipeline(name).unwrap();
            assert_eq!(p.name(), name);
            assert!(p.width() > 0 && p.height() > 0);
        }
        assert!(pipeline("poster").is_none());
    }

    #[test]
    fn screenshots_flatten_and_icon_keeps_alpha() {
        for name in ["home", "progress", "settings", "reward", "splash", "promo-01"] {
            match pipeline(name).unwrap().mode() {
                OutputMode::Opaque(_) => {}
                OutputMode::KeepAlpha => panic!("{} should flatten", name),
            }
        }
        assert_eq!(pipeline("icon").unwrap().mode(), OutputMode::KeepAlpha);
    }

    #[test]
    fn zero_dimension_fails_before_drawing() {
        let p = Pipeline::new("broken", 0, 64, OutputMode::KeepAlpha)
            .step("never runs", |_, _| panic!("stepped into a zero canvas"));
        let err = p.render(&ctx()).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn render_png_produces_a_png_signature() {
        let png = pipeline("home").unwrap().render_png(&ctx()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn same_context_renders_identical_bytes() {
        let context = ctx();
        let p = pipeline("reward").unwrap();
        let a = p.render_png(&context).unwrap();
        let b = p.render_png(&context).unwrap();
        assert_eq!(a, b);
    }
}
