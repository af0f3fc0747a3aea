//! Stampshot
//!
//! A store-asset renderer for the stamp-card app: it draws the screenshot,
//! icon, splash, and promo artwork as procedural raster scenes, with no UI
//! toolkit or browser behind them.
//!
//! # Features
//!
//! - **Fixed scene battery**: four 520x1120 screenshots, a 1024x1024 icon
//!   with transparent rounded corners, and 1284x2778 splash/promo frames
//! - **Deterministic output**: same context in, identical PNG bytes out
//! - **Themeable**: five built-in palettes plus JSON-loaded custom ones
//!
//! # Example
//!
//! ```
//! use stampshot::{pipeline, FontStack, SceneContext};
//!
//! # fn main() -> stampshot::Result<()> {
//! let ctx = SceneContext::new(FontStack::bitmap_only());
//! let scene = pipeline("home").expect("known scene");
//! let png = scene.render_png(&ctx)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod color;
pub mod draw;
pub mod error;
pub mod geom;
pub mod rng;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod theme;

pub use canvas::{Canvas, Mask};
pub use color::{Rgb, Rgba};
pub use error::{Error, Result};
pub use scene::{pipeline, OutputMode, Pipeline, SceneContext, SCENE_NAMES};
pub use text::FontStack;
pub use theme::{StampProgress, Strings, Theme};
