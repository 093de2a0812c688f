//! Fixtures shared by the command tests.

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use crate::cli::Cli;

pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "x").unwrap();
}

/// A fixed-name root under `temp`, so the random temp name never matches.
pub fn share(temp: &TempDir) -> String {
    let root = temp.path().join("share");
    std::fs::create_dir_all(&root).unwrap();
    root.to_string_lossy().into_owned()
}

/// Parse a command line with config loading disabled and `root` as the only
/// root.
pub fn parse_with_root(root: &str, args: &[&str]) -> Cli {
    let mut full = vec!["docfinder", "--no-config", "--color", "never", "--root", root];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}
