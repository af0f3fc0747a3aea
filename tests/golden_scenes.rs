use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use stampshot::{pipeline, FontStack, SceneContext, SCENE_NAMES};

// Goldens are sha256 digests of the encoded PNG, rendered with the builtin
// bitmap face so the bytes do not depend on which system fonts are installed.

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{name}.sha256"));
    p
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[test]
fn golden_png_digests_match_fixtures() {
    let ctx = SceneContext::new(FontStack::bitmap_only());

    for name in SCENE_NAMES {
        let scene = pipeline(name).expect("listed scene");
        let png = scene.render_png(&ctx).expect("render");

        assert!(png.len() > 100, "{name}: PNG seems too small");
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n", "{name}: bad PNG signature");

        let gpath = golden_path(name);
        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&gpath, digest(&png)).expect("write golden");
            eprintln!("Updated golden: {:?}", gpath);
            continue;
        }

        if !gpath.exists() {
            eprintln!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                gpath
            );
            continue;
        }

        let expected = fs::read_to_string(&gpath).expect("read golden");
        assert_eq!(digest(&png), expected.trim(), "{name}: PNG digest drifted");
    }
}

#[test]
fn renders_are_stable_across_calls() {
    let ctx = SceneContext::new(FontStack::bitmap_only());
    for name in ["home", "reward", "icon", "promo-01"] {
        let a = pipeline(name).expect("scene").render_png(&ctx).expect("render");
        let b = pipeline(name).expect("scene").render_png(&ctx).expect("render");
        assert_eq!(a, b, "{name}: two renders of the same context disagree");
    }
}
