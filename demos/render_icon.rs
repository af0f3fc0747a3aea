//! Render the app icon to icon.png, keeping the transparent rounded corners.
//! Run with: cargo run --example render_icon

use stampshot::{pipeline, FontStack, SceneContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = SceneContext::new(FontStack::system());
    let scene = pipeline("icon").ok_or("unknown scene")?;

    let canvas = scene.render(&ctx)?;
    let corner = canvas.pixel(0, 0).map(|p| p.a).unwrap_or(255);
    println!("corner alpha: {corner} (0 = cut away by the mask)");

    let png = scene.render_png(&ctx)?;
    std::fs::write("icon.png", &png)?;
    println!("wrote icon.png ({} bytes)", png.len());
    Ok(())
}
