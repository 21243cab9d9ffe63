//! Plugin Error Types
//!
//! Errors raised while registering, importing and resolving plugins.

use thiserror::Error;

/// Result type for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error types for plugin composition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PluginError {
    /// Plugin was built against an incompatible SDK
    #[error("Version compatibility error: {message}")]
    VersionIncompatible { message: String },

    /// Plugin not found
    #[error("Plugin not found: {plugin_id}")]
    PluginNotFound { plugin_id: String },

    /// Plugin already registered
    #[error("Plugin already registered: {plugin_id}")]
    PluginAlreadyRegistered { plugin_id: String },

    /// Configuration error
    #[error("Plugin configuration error: {message}")]
    ConfigurationError { message: String },
}

impl PluginError {
    /// Create a version incompatible error
    pub fn version_incompatible<S: Into<String>>(message: S) -> Self {
        Self::VersionIncompatible { message: message.into() }
    }

    /// Create a plugin not found error
    pub fn plugin_not_found<S: Into<String>>(plugin_id: S) -> Self {
        Self::PluginNotFound { plugin_id: plugin_id.into() }
    }

    /// Create a plugin already registered error
    pub fn plugin_already_registered<S: Into<String>>(plugin_id: S) -> Self {
        Self::PluginAlreadyRegistered { plugin_id: plugin_id.into() }
    }

    /// Create a configuration error
    pub fn configuration_error<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError { message: message.into() }
    }

    /// Check if error is a configuration issue
    pub fn is_configuration_error(&self) -> bool {
        matches!(self,
            PluginError::ConfigurationError { .. } |
            PluginError::VersionIncompatible { .. }
        )
    }

    /// Check if error concerns the set of known plugins
    pub fn is_lookup_error(&self) -> bool {
        matches!(self,
            PluginError::PluginNotFound { .. } |
            PluginError::PluginAlreadyRegistered { .. }
        )
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::configuration_error(format!("JSON error: {}", err))
    }
}

impl From<semver::Error> for PluginError {
    fn from(err: semver::Error) -> Self {
        PluginError::version_incompatible(format!("Invalid version: {}", err))
    }
}
