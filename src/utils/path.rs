//! Path utilities: expand `~` in typed paths, compare source/destination.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the home directory.
/// Prompted paths never go through a shell, so this is done by hand.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// True when both paths name the same file on disk.
/// Falls back to a lexical comparison when either side cannot be resolved.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}
