//! Discovery of descriptor files.

use std::path::{Path, PathBuf};

use svcgraph_common::error::{Result, SvcgraphError};

/// Lists the regular files directly inside `dir`, sorted by path.
///
/// Symlinks are followed, so a link to a descriptor counts as a descriptor.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed.
pub fn service_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| SvcgraphError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Collects descriptor files from every directory, in argument order.
///
/// Arguments that are not directories, or cannot be listed, are reported
/// and skipped.
#[must_use]
pub fn collect_service_files(directories: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in directories {
        if !dir.is_dir() {
            tracing::warn!(path = %dir.display(), "not a directory, skipping");
            continue;
        }
        match service_files_in(dir) {
            Ok(found) => {
                tracing::debug!(path = %dir.display(), count = found.len(), "scanned service directory");
                files.extend(found);
            }
            Err(e) => tracing::warn!(error = %e, "could not scan directory, skipping"),
        }
    }
    tracing::info!(count = files.len(), "collected service files");
    files
}
