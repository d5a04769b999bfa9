//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Expand `~`, then resolve a relative path against `base`.
///
/// # Examples
/// ```ignore
/// resolve_path(Path::new("/site"), Path::new("logo.svg"))  -> "/site/logo.svg"
/// resolve_path(Path::new("/site"), Path::new("/tmp/a.svg")) -> "/tmp/a.svg"
/// resolve_path(Path::new("/site"), Path::new("~/a.svg"))    -> "$HOME/a.svg"
/// ```
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}
