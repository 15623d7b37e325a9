use chrono::Utc;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let dest_path = out_dir.join("version.rs");
    let manifest = env::var_os("CARGO_MANIFEST_DIR")
        .map(|dir| Path::new(&dir).join("Cargo.toml"))
        .ok_or_else(|| io::Error::other("CARGO_MANIFEST_DIR is not set"))?;

    if is_up_to_date(&dest_path, &manifest) {
        return Ok(());
    }

    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    fs::write(
        &dest_path,
        format!(
            "pub const BUILD_TIME: &str = \"{}\";\npub const GIT_HASH: &str = \"{}\";\n",
            build_time,
            short_git_hash()
        ),
    )
}

// Generated file exists and is newer than the manifest
fn is_up_to_date(generated: &Path, manifest: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(generated), modified(manifest)) {
        (Some(generated), Some(manifest)) => generated >= manifest,
        _ => false,
    }
}

fn short_git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
