//! Command-line renderer for the store-asset scenes.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use stampshot::{pipeline, FontStack, SceneContext, StampProgress, Theme, SCENE_NAMES};

/// Render the stamp-card store assets as PNG files
#[derive(Parser, Debug)]
#[command(name = "stampshot")]
#[command(about = "Render the stamp-card store assets as PNG files")]
#[command(version)]
struct Args {
    /// Scenes to render (default: all of them)
    scenes: Vec<String>,

    /// Output directory for the PNG files
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Built-in theme to render the screenshots with
    #[arg(long)]
    theme: Option<String>,

    /// Load the screenshot theme from a JSON file instead
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,

    /// Stamps needed for the reward
    #[arg(long)]
    goal: Option<u32>,

    /// Stamps already earned (progress screenshot)
    #[arg(long)]
    earned: Option<u32>,

    /// Seed for the reward-screen confetti
    #[arg(long)]
    seed: Option<u32>,

    /// List scene and theme names, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        println!("scenes:");
        for name in SCENE_NAMES {
            println!("  {name}");
        }
        println!("themes:");
        for name in Theme::BUILTIN_NAMES {
            println!("  {name}");
        }
        return Ok(());
    }

    let mut ctx = SceneContext::new(FontStack::system());

    if let Some(path) = &args.theme_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading theme file {}", path.display()))?;
        ctx.theme = serde_json::from_str(&text)
            .with_context(|| format!("parsing theme file {}", path.display()))?;
    } else if let Some(name) = &args.theme {
        ctx.theme = match Theme::by_name(name) {
            Some(theme) => theme,
            None => bail!(
                "unknown theme '{}' (built-ins: {})",
                name,
                Theme::BUILTIN_NAMES.join(", ")
            ),
        };
    }

    if args.goal.is_some() || args.earned.is_some() {
        let goal = args.goal.unwrap_or_else(|| ctx.progress.goal());
        let earned = args.earned.unwrap_or_else(|| ctx.progress.earned());
        ctx.progress = StampProgress::new(goal, earned);
    }

    if let Some(seed) = args.seed {
        ctx.confetti_seed = seed;
    }

    let scenes: Vec<&str> = if args.scenes.is_empty() {
        SCENE_NAMES.to_vec()
    } else {
        args.scenes.iter().map(String::as_str).collect()
    };

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    for name in &scenes {
        let scene = match pipeline(name) {
            Some(scene) => scene,
            None => bail!("unknown scene '{}' (try: {})", name, SCENE_NAMES.join(", ")),
        };
        let png = scene.render_png(&ctx)?;
        let path = args.out.join(format!("{name}.png"));
        fs::write(&path, &png).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} ({} bytes)", path.display(), png.len());
    }

    log::info!("rendered {} scene(s) into {}", scenes.len(), args.out.display());
    Ok(())
}
