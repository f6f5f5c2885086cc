//! Symlink-safe filesystem helpers.
//!
//! These use `symlink_metadata()` so that traversal never descends into a
//! symlinked directory.

use std::path::Path;

/// Returns `true` if the path is a regular directory (not a symlink).
#[must_use]
pub(crate) fn is_regular_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}
