pub mod errors;
pub mod models;
pub mod options;
pub mod parser;
pub mod plugin;
pub mod report;
pub mod tree;
pub mod walker;

pub(crate) mod fs_util;

// Re-export key types at crate root for convenience.
pub use errors::{Result, ValidationError, WalkError};
pub use models::{MarketplaceDescriptor, Owner, PluginDescriptor, PluginEntry};
pub use options::Options;
pub use plugin::{validate_frontmatter, validate_marketplace, validate_plugin};
pub use report::{Format, Reporter};
pub use tree::validate_tree;
pub use walker::{classify, walk, FileKind};
