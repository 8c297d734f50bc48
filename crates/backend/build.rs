//! Places the workspace `config.toml` (and a configured snapshot file, if it
//! sits next to it) beside the built executable, where the backend looks for
//! them at startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const FILES: &[&str] = &["config.toml", "inventory_snapshot.json"];

fn main() {
    for name in FILES {
        println!("cargo:rerun-if-changed=../../{}", name);
    }

    let Some(target_dir) = target_profile_dir() else {
        println!("cargo:warning=Could not locate target profile directory, skipping config copy");
        return;
    };
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for name in FILES {
        let source = workspace_root.join(name);
        if !source.exists() {
            continue;
        }
        let dest = target_dir.join(name);
        match fs::copy(&source, &dest) {
            Ok(_) => println!("cargo:warning=Copied {} to {:?}", name, dest),
            Err(e) => panic!("Failed to copy {}: {}", name, e),
        }
    }
}

/// `OUT_DIR` is `target/<profile>/build/backend-xxx/out`; walk up to
/// `target/<profile>`.
fn target_profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
