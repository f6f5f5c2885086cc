use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::errors::{Result, ValidationError};

/// Header block delimiter: `---` followed by a line feed.
pub const DELIMITER: &[u8] = b"---\n";

/// Regex for lowercase kebab-case names.
static KEBAB_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("kebab-case regex"));

/// Read and deserialize a JSON descriptor.
///
/// The file is read fully and closed before parsing starts.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Result of locating a header block at the top of a document.
#[derive(Debug, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    /// Content does not start with the delimiter line.
    Absent,
    /// Opening delimiter found but no closing one.
    Unclosed,
    /// Raw header text between the two delimiters.
    Closed(&'a [u8]),
}

/// Locate the header block in raw document content.
///
/// The closing delimiter is the next occurrence of `---\n` after the opening
/// one, wherever it appears.
#[must_use]
pub fn split_frontmatter(content: &[u8]) -> Frontmatter<'_> {
    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return Frontmatter::Absent;
    };
    match find(rest, DELIMITER) {
        Some(end) => Frontmatter::Closed(&rest[..end]),
        None => Frontmatter::Unclosed,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Returns `true` if any directory above the file is named `segment`.
///
/// The file name itself is not considered.
#[must_use]
pub fn has_dir_segment(path: &Path, segment: &str) -> bool {
    path.parent()
        .is_some_and(|dir| dir.components().any(|c| c.as_os_str() == segment))
}

/// Returns `true` for lowercase kebab-case names such as `code-review`.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_CASE_RE.is_match(name)
}

/// Ensure `value` is kebab-case, naming `field` in the error.
pub(crate) fn require_kebab_case(field: &str, value: &str) -> Result<()> {
    if is_kebab_case(value) {
        Ok(())
    } else {
        Err(ValidationError::NotKebabCase {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
