//! Render the home screenshot to home.png in the working directory.
//! Run with: cargo run --example render_home

use stampshot::{pipeline, FontStack, SceneContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = SceneContext::new(FontStack::system());
    let scene = pipeline("home").ok_or("unknown scene")?;

    let png = scene.render_png(&ctx)?;
    std::fs::write("home.png", &png)?;
    println!(
        "wrote home.png ({} bytes, {}x{})",
        png.len(),
        scene.width(),
        scene.height()
    );
    Ok(())
}
