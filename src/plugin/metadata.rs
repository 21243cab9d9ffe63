//! Plugin Metadata
//!
//! Identification of a plugin package: id, display name, the SDK version it
//! was built against and an optional logo.

use semver::Version;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::plugin::error::{PluginError, PluginResult};
use crate::version::sdk_version;

/// Identifier used by the registry that hosts imported plugins
pub const HOST_PLUGIN_ID: &str = "polyphony-host";

/// Immutable description of a plugin package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Unique plugin identifier
    pub id: String,

    /// Human-readable name
    pub display_name: String,

    /// SDK version the plugin was built against
    pub sdk_version: Version,

    /// Optional logo shown next to the plugin
    #[serde(default)]
    pub logo_uri: Option<Url>,
}

impl PluginMetadata {
    /// Create metadata for a plugin
    pub fn new<S: Into<String>>(id: S, display_name: S, sdk_version: Version) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            sdk_version,
            logo_uri: None,
        }
    }

    /// Create metadata for a plugin built against the running SDK
    pub fn current<S: Into<String>>(id: S, display_name: S) -> Self {
        Self::new(id, display_name, sdk_version())
    }

    /// Metadata of the registry that plugins are imported into
    pub fn host() -> Self {
        Self::current(HOST_PLUGIN_ID, "Polyphony")
    }

    /// Attach a logo
    pub fn with_logo_uri(mut self, logo_uri: Url) -> Self {
        self.logo_uri = Some(logo_uri);
        self
    }

    /// Check that the id is usable as a catalog key.
    ///
    /// Ids start with a lowercase ASCII letter followed by lowercase letters,
    /// digits, dots or hyphens.
    pub fn validate(&self) -> PluginResult<()> {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {}
            Some(first) => {
                return Err(PluginError::configuration_error(format!(
                    "Plugin id '{}' must start with a lowercase letter, got '{}'",
                    self.id, first
                )));
            }
            None => return Err(PluginError::configuration_error("Plugin id must not be empty")),
        }

        if let Some(ch) = chars.find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-' || *ch == '.')) {
            return Err(PluginError::configuration_error(format!(
                "Plugin id '{}' contains invalid character '{}'",
                self.id, ch
            )));
        }

        if self.display_name.trim().is_empty() {
            return Err(PluginError::configuration_error(format!(
                "Plugin '{}' has an empty display name",
                self.id
            )));
        }

        Ok(())
    }
}
