//! Marketplace validation: marketplace descriptor, plugin descriptors, and
//! agent/command documentation headers.

pub mod frontmatter;
pub mod manifest;
pub mod marketplace;

pub use frontmatter::validate_frontmatter;
pub use manifest::{validate_plugin, PLUGIN_FILE_NAME};
pub use marketplace::{validate_marketplace, MARKETPLACE_PATH};
