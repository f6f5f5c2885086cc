//! Marketplace descriptor (`.claude-plugin/marketplace.json`) validation.

use std::path::Path;

use crate::errors::{Result, ValidationError};
use crate::models::{is_blank, MarketplaceDescriptor};
use crate::options::Options;
use crate::parser::{read_json, require_kebab_case};

/// Location of the marketplace descriptor relative to the tree root.
pub const MARKETPLACE_PATH: [&str; 2] = [".claude-plugin", "marketplace.json"];

/// Validate a marketplace descriptor at the given path.
///
/// Stops at the first violation. Checks run in this order: `name`,
/// `owner.name`, `owner.email`, `version`, non-empty `plugins`, then each
/// entry's `name` and `source`.
pub fn validate_marketplace(path: &Path, options: &Options) -> Result<()> {
    let descriptor: MarketplaceDescriptor = read_json(path)?;
    check_marketplace(&descriptor, options)
}

/// Apply the field rules to an already parsed descriptor.
pub fn check_marketplace(descriptor: &MarketplaceDescriptor, options: &Options) -> Result<()> {
    if is_blank(&descriptor.name) {
        return Err(missing("name"));
    }
    let owner = descriptor.owner.clone().unwrap_or_default();
    if is_blank(&owner.name) {
        return Err(missing("owner.name"));
    }
    if is_blank(&owner.email) {
        return Err(missing("owner.email"));
    }
    if is_blank(&descriptor.version) {
        return Err(missing("version"));
    }

    let plugins = descriptor.plugins.as_deref().unwrap_or_default();
    if plugins.is_empty() {
        return Err(missing("plugins"));
    }

    for (i, entry) in plugins.iter().enumerate() {
        if is_blank(&entry.name) {
            return Err(missing(&format!("plugin[{i}].name")));
        }
        if is_blank(&entry.source) {
            return Err(missing(&format!("plugin[{i}].source")));
        }
    }

    if options.strict {
        for (i, entry) in plugins.iter().enumerate() {
            let name = entry.name.as_deref().unwrap_or_default();
            require_kebab_case(&format!("plugin[{i}].name"), name)?;
        }
    }

    Ok(())
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingField(field.to_string())
}
