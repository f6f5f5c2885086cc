//! Header-block checks for agent and command Markdown files.

use std::path::Path;

use crate::errors::{Result, ValidationError};
use crate::options::Options;
use crate::parser::{has_dir_segment, require_kebab_case, split_frontmatter, Frontmatter};

/// Directory names whose Markdown files carry header blocks.
pub const DOC_DIRS: [&str; 2] = ["agents", "commands"];

/// Extension of documentation files.
pub const DOC_EXTENSION: &str = ".md";

/// Keys an agent header must define in strict mode.
const AGENT_REQUIRED_KEYS: &[&str] = &["name", "description"];

/// Validate the header block of a documentation file.
///
/// Files below a `commands` directory may omit the block entirely. Everywhere
/// else it must be present and closed. Header content is only inspected in
/// strict mode.
pub fn validate_frontmatter(path: &Path, options: &Options) -> Result<()> {
    let content = std::fs::read(path)?;
    let is_command = has_dir_segment(path, "commands");

    let header = match split_frontmatter(&content) {
        Frontmatter::Absent if is_command => None,
        Frontmatter::Absent => return Err(ValidationError::MissingFrontmatter),
        Frontmatter::Unclosed => return Err(ValidationError::UnclosedFrontmatter),
        Frontmatter::Closed(header) => Some(header),
    };

    if !options.strict {
        return Ok(());
    }

    if let Some(stem) = path.file_stem() {
        require_kebab_case("file name", &stem.to_string_lossy())?;
    }

    let is_agent = has_dir_segment(path, "agents") && !is_command;
    if let Some(header) = header.filter(|_| is_agent) {
        check_agent_header(header)?;
    }

    Ok(())
}

/// Strict-mode check: an agent header is a YAML mapping naming the agent.
fn check_agent_header(header: &[u8]) -> Result<()> {
    let text = String::from_utf8_lossy(header);
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(&text).map_err(|e| ValidationError::InvalidFrontmatter {
            message: e.to_string(),
        })?;

    let mapping = match value {
        serde_yaml_ng::Value::Mapping(m) => m,
        serde_yaml_ng::Value::Null => serde_yaml_ng::Mapping::new(),
        _ => {
            return Err(ValidationError::InvalidFrontmatter {
                message: "expected key-value pairs".to_string(),
            })
        }
    };

    for key in AGENT_REQUIRED_KEYS {
        if !mapping.contains_key(*key) {
            return Err(ValidationError::MissingField((*key).to_string()));
        }
    }
    Ok(())
}
