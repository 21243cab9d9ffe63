//! Version Compatibility Checker
//!
//! Validates the SDK version a plugin was built against.

use semver::Version;

use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::metadata::PluginMetadata;
use crate::version::sdk_version;

/// Checker for plugin version compatibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCompatibilityChecker {
    /// Running SDK version
    sdk_version: Version,
}

impl VersionCompatibilityChecker {
    /// Create a new version compatibility checker
    pub fn new(sdk_version: Version) -> Self {
        Self { sdk_version }
    }

    /// The SDK version plugins are checked against
    pub fn sdk_version(&self) -> &Version {
        &self.sdk_version
    }

    /// Check if a plugin SDK version is compatible
    pub fn is_sdk_compatible(&self, plugin_sdk_version: &Version) -> bool {
        // Same major version is compatible
        self.get_major_version(&self.sdk_version) == self.get_major_version(plugin_sdk_version)
    }

    /// Get major version from an SDK version
    pub fn get_major_version(&self, version: &Version) -> u64 {
        version.major
    }

    /// Check plugin compatibility
    pub fn check_plugin_compatibility(&self, metadata: &PluginMetadata) -> PluginResult<()> {
        if !self.is_sdk_compatible(&metadata.sdk_version) {
            return Err(PluginError::version_incompatible(format!(
                "Plugin '{}' requires SDK version {} but current version is {}",
                metadata.id,
                metadata.sdk_version,
                self.sdk_version
            )));
        }
        Ok(())
    }

    /// Check every plugin and report the outcome per plugin id
    pub fn check_all_plugins<'a, I>(&self, plugins: I) -> Vec<(String, PluginResult<()>)>
    where
        I: IntoIterator<Item = &'a PluginMetadata>,
    {
        plugins
            .into_iter()
            .map(|metadata| (metadata.id.clone(), self.check_plugin_compatibility(metadata)))
            .collect()
    }
}

impl Default for VersionCompatibilityChecker {
    fn default() -> Self {
        Self::new(sdk_version())
    }
}
