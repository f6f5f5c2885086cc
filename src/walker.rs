//! Recursive traversal of the `plugins` directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::WalkError;
use crate::fs_util::is_regular_dir;
use crate::parser::has_dir_segment;
use crate::plugin::frontmatter::{DOC_DIRS, DOC_EXTENSION};
use crate::plugin::PLUGIN_FILE_NAME;

/// What a visited file should be validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A `plugin.json` descriptor.
    PluginDescriptor,
    /// A Markdown file below an `agents` or `commands` directory.
    Documentation,
}

/// Decide whether a file is validated, and how.
///
/// Returns `None` for files the walker ignores.
#[must_use]
pub fn classify(path: &Path) -> Option<FileKind> {
    let name = path.file_name()?.to_string_lossy();
    if name == PLUGIN_FILE_NAME {
        return Some(FileKind::PluginDescriptor);
    }
    if name.ends_with(DOC_EXTENSION) && DOC_DIRS.iter().any(|d| has_dir_segment(path, d)) {
        return Some(FileKind::Documentation);
    }
    None
}

/// Walk `dir` recursively, calling `visit` for every classified file.
///
/// Entries of each directory are visited in sorted order. Symlinked
/// directories are treated as files and never descended into. The first
/// directory that cannot be read stops the walk.
pub fn walk<F>(dir: &Path, visit: &mut F) -> Result<(), WalkError>
where
    F: FnMut(&Path, FileKind),
{
    for path in sorted_entries(dir)? {
        if is_regular_dir(&path) {
            walk(&path, visit)?;
        } else if let Some(kind) = classify(&path) {
            debug!(path = %path.display(), ?kind, "visiting file");
            visit(&path, kind);
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
    let walk_error = |source| WalkError {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(walk_error)? {
        paths.push(entry.map_err(walk_error)?.path());
    }
    paths.sort();
    Ok(paths)
}
