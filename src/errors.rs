use std::path::PathBuf;

use thiserror::Error;

/// A problem found while validating a single file.
///
/// Every variant is local to one file: the run reports it and moves on.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not well-formed JSON of the expected shape.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is absent or empty. Holds the dotted field path.
    #[error("{}", missing_field_message(.0))]
    MissingField(String),

    /// A documentation file that needs a header block has none.
    #[error("missing YAML frontmatter")]
    MissingFrontmatter,

    /// The opening `---` delimiter has no matching closing delimiter.
    #[error("YAML frontmatter not properly closed")]
    UnclosedFrontmatter,

    /// The header block is not a YAML mapping (strict mode).
    #[error("invalid YAML frontmatter: {message}")]
    InvalidFrontmatter { message: String },

    /// A name is not lowercase kebab-case (strict mode).
    #[error("{field} is not valid kebab-case: \"{value}\"")]
    NotKebabCase { field: String, value: String },
}

impl ValidationError {
    /// Stable machine-readable name of the error class.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read(_) => "read",
            Self::Parse(_) => "parse",
            Self::MissingField(_) => "missing_field",
            Self::MissingFrontmatter => "missing_frontmatter",
            Self::UnclosedFrontmatter => "unclosed_frontmatter",
            Self::InvalidFrontmatter { .. } => "invalid_frontmatter",
            Self::NotKebabCase { .. } => "not_kebab_case",
        }
    }

    /// Field path the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(f) => Some(f),
            Self::NotKebabCase { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn missing_field_message(field: &str) -> String {
    if field == "plugins" {
        "at least one plugin is required".to_string()
    } else {
        format!("{field} is required")
    }
}

/// Directory traversal failed. Fatal for the whole run.
#[derive(Error, Debug)]
#[error("cannot read directory {}: {source}", .path.display())]
pub struct WalkError {
    /// Directory (or entry) that could not be read.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Convenience alias for per-file validation results.
pub type Result<T> = std::result::Result<T, ValidationError>;
