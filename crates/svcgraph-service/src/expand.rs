//! Directory dependency expansion.
//!
//! A directory dependency names a directory whose entries each stand for a
//! service. Entries are usually empty files or symlinks named after the
//! service they enable.

use std::path::{Path, PathBuf};

use svcgraph_common::constants::strip_parameter;

/// Resolves a directory dependency to the service names it implies.
///
/// Relative paths are resolved against `anchor`, the directory holding the
/// descriptor that declared the dependency. Hidden entries are skipped and
/// instance arguments are stripped from entry names. A path that is not an
/// existing directory yields no names.
#[must_use]
pub fn expand_directory(path: &Path, anchor: &Path) -> Vec<String> {
    let resolved: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        anchor.join(path)
    };

    let entries = match std::fs::read_dir(&resolved) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %resolved.display(), error = %e, "dependency directory not readable");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if file_name.starts_with('.') {
                return None;
            }
            Some(strip_parameter(&file_name).to_owned())
        })
        .collect();
    names.sort();

    tracing::debug!(path = %resolved.display(), count = names.len(), "expanded dependency directory");
    names
}
