use serde::Deserialize;

/// A person or organisation: marketplace owner, plugin author.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Owner {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// Top-level `marketplace.json` descriptor.
///
/// Required fields are `Option` so that a missing key, `null`, and `""` all
/// reach the field checks instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketplaceDescriptor {
    #[serde(rename = "$schema")]
    pub schema: Option<String>,
    pub name: Option<String>,
    pub owner: Option<Owner>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub plugins: Option<Vec<PluginEntry>>,
}

/// One entry of the marketplace `plugins` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginEntry {
    pub name: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: Option<Owner>,
    pub category: Option<String>,
}

/// Per-plugin `plugin.json` descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginDescriptor {
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: Option<Owner>,
    pub license: Option<String>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Path string or inline list; never inspected.
    pub agents: Option<serde_json::Value>,
    /// Path string or inline list; never inspected.
    pub commands: Option<serde_json::Value>,
    /// Open mapping of server name to arbitrary configuration.
    #[serde(rename = "mcpServers")]
    pub mcp_servers: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Returns `true` if a required string field is absent, `null`, or empty.
#[must_use]
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
