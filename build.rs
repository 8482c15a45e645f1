use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // The static pages aren't compiled in, but without a hint here cargo has no
    // reason to re-run this script when they change, and the build id below
    // would keep pointing at an older front-end.
    rerun_if_changed_dir("static");

    // Printed in the startup log line so a running server can be matched to
    // the build that produced it.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}", build_id);
}

fn rerun_if_changed_dir(dir: impl AsRef<Path>) {
    let dir = dir.as_ref();
    if !dir.exists() {
        return;
    }
    let mut stack: Vec<PathBuf> = vec![dir.to_path_buf()];
    while let Some(path) = stack.pop() {
        let Ok(entries) = fs::read_dir(&path) else {
            continue;
        };
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
                continue;
            }
            if matches!(
                p.extension().and_then(|s| s.to_str()),
                Some("html" | "js" | "css")
            ) {
                println!("cargo:rerun-if-changed={}", p.display());
            }
        }
    }
}
