//! Plugin descriptor (`plugin.json`) validation.

use std::path::Path;

use crate::errors::{Result, ValidationError};
use crate::models::{is_blank, PluginDescriptor};
use crate::options::Options;
use crate::parser::{read_json, require_kebab_case};

/// Canonical file name of a plugin descriptor.
pub const PLUGIN_FILE_NAME: &str = "plugin.json";

/// Validate a `plugin.json` file at the given path.
///
/// Stops at the first violation, checking `name`, `description`, `version`,
/// `author.name`, `author.email` in that order. Optional metadata is accepted
/// without shape checks.
pub fn validate_plugin(path: &Path, options: &Options) -> Result<()> {
    let descriptor: PluginDescriptor = read_json(path)?;
    check_plugin(&descriptor, options)
}

/// Apply the field rules to an already parsed descriptor.
pub fn check_plugin(descriptor: &PluginDescriptor, options: &Options) -> Result<()> {
    let author = descriptor.author.clone().unwrap_or_default();
    let required: [(&str, &Option<String>); 5] = [
        ("name", &descriptor.name),
        ("description", &descriptor.description),
        ("version", &descriptor.version),
        ("author.name", &author.name),
        ("author.email", &author.email),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| is_blank(value)) {
        return Err(ValidationError::MissingField(field.to_string()));
    }

    if options.strict {
        require_kebab_case("name", descriptor.name.as_deref().unwrap_or_default())?;
    }

    Ok(())
}
