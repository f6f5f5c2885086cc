//! One validation pass over a marketplace root.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::WalkError;
use crate::options::Options;
use crate::plugin::{validate_frontmatter, validate_marketplace, validate_plugin, MARKETPLACE_PATH};
use crate::report::Reporter;
use crate::walker::{walk, FileKind};

/// Directory below the root that holds the plugins.
pub const PLUGINS_DIR: &str = "plugins";

/// Path of the marketplace descriptor for a given root.
#[must_use]
pub fn marketplace_path(root: &Path) -> PathBuf {
    MARKETPLACE_PATH.iter().fold(root.to_path_buf(), |p, part| p.join(part))
}

/// Validate the marketplace descriptor (if any) and every plugin file below
/// `<root>/plugins`, reporting each file as soon as it is checked.
///
/// Per-file failures are recorded in `reporter` and do not stop the run.
/// A directory that cannot be read aborts it with [`WalkError`].
pub fn validate_tree<O: Write, E: Write>(
    root: &Path,
    options: &Options,
    reporter: &mut Reporter<O, E>,
) -> Result<(), WalkError> {
    info!(root = %root.display(), strict = options.strict, "validating marketplace tree");

    let marketplace = marketplace_path(root);
    if marketplace.exists() {
        reporter.record(&marketplace, &validate_marketplace(&marketplace, options));
    } else {
        debug!(path = %marketplace.display(), "no marketplace descriptor, skipping");
    }

    walk(&root.join(PLUGINS_DIR), &mut |path: &Path, kind| {
        let outcome = match kind {
            FileKind::PluginDescriptor => validate_plugin(path, options),
            FileKind::Documentation => validate_frontmatter(path, options),
        };
        reporter.record(path, &outcome);
    })
}
