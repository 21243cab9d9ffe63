//! Plugin Catalog
//!
//! Keyed collection of the plugin registries available to an application.
//! The configured plugin order is resolved against it to obtain the ordered
//! registry list wrappers are built from.

use std::collections::HashMap;
use log::{debug, warn};

use crate::plugin::compatibility::VersionCompatibilityChecker;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::metadata::PluginMetadata;
use crate::plugin::registry::PluginRegistry;

/// Available plugin registries by plugin id
#[derive(Debug, Default)]
pub struct PluginCatalog {
    registries: HashMap<String, PluginRegistry>,
    checker: VersionCompatibilityChecker,
}

impl PluginCatalog {
    /// Create a new plugin catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that checks against a specific SDK version
    pub fn with_checker(checker: VersionCompatibilityChecker) -> Self {
        Self {
            registries: HashMap::new(),
            checker,
        }
    }

    /// Register a plugin
    pub fn register(&mut self, registry: PluginRegistry) -> PluginResult<()> {
        registry.metadata().validate()?;

        let id = registry.metadata().id.clone();
        if self.registries.contains_key(&id) {
            return Err(PluginError::plugin_already_registered(id));
        }

        debug!("Registered plugin '{}' ({})", id, registry.metadata().display_name);
        self.registries.insert(id, registry);
        Ok(())
    }

    /// Unregister a plugin
    pub fn unregister(&mut self, id: &str) -> PluginResult<PluginRegistry> {
        self.registries
            .remove(id)
            .ok_or_else(|| PluginError::plugin_not_found(id))
    }

    pub fn get(&self, id: &str) -> Option<&PluginRegistry> {
        self.registries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.registries.contains_key(id)
    }

    /// List all registered plugin ids, sorted
    pub fn list_plugins(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.registries.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    /// Plugins built against an incompatible SDK
    pub fn incompatible(&self) -> Vec<PluginMetadata> {
        self.checker
            .check_all_plugins(self.registries.values().map(PluginRegistry::metadata))
            .into_iter()
            .filter(|(_, result)| result.is_err())
            .filter_map(|(id, _)| self.registries.get(&id).map(|r| r.metadata().clone()))
            .collect()
    }

    /// Registries for `order`, in that order.
    ///
    /// Fails on the first unknown id. Incompatible plugins are returned as
    /// well; importing them fails later with a version error.
    pub fn resolve<S: AsRef<str>>(&self, order: &[S]) -> PluginResult<Vec<PluginRegistry>> {
        order
            .iter()
            .map(|id| {
                let id = id.as_ref();
                let registry = self
                    .registries
                    .get(id)
                    .ok_or_else(|| PluginError::plugin_not_found(id))?;
                if self.checker.check_plugin_compatibility(registry.metadata()).is_err() {
                    warn!("Plugin '{}' targets SDK {}", id, registry.metadata().sdk_version);
                }
                Ok(registry.clone())
            })
            .collect()
    }
}
