use std::path::{Path, PathBuf};

use anyhow::Context;
use gw_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.gapwise` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// The nearest project root above the current directory, or the current
/// directory itself when none exists yet.
pub fn resolve_project_root() -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}
