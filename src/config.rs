use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use toml::Value;
use log::{debug, info};

use crate::logging::{LogConfig, LogDestination, LogFormat};
use crate::plugin::{PluginCatalog, PluginError, PluginRegistry};

/// Configuration storage - section_name -> key -> value
pub type Configuration = HashMap<String, HashMap<String, String>>;

/// Configuration manager
pub struct ConfigManager {
    config: Configuration,
    config_file_path: Option<PathBuf>,
    selected_section: Option<String>,
}

impl ConfigManager {
    /// Create a new ConfigManager from a Configuration (primarily for testing)
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config,
            config_file_path: None,
            selected_section: None,
        }
    }

    /// Load configuration using discovery hierarchy
    pub fn load() -> Result<Self> {
        debug!("Starting configuration discovery");

        for path in discover_config_files() {
            debug!("Attempting to load config from: {}", path.display());
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        info!("No configuration file found, using empty configuration");
        Ok(Self::from_config(Configuration::new()))
    }

    /// Load configuration from explicit file path
    pub fn load_from_file(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = parse_toml_config(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(Self {
            config,
            config_file_path: Some(path),
            selected_section: None,
        })
    }

    /// File this configuration was read from, if any
    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    /// Get value from configuration with section fallback
    pub fn get_value(&self, section: &str, key: &str) -> Option<&String> {
        // Priority: selected_section -> specified section -> base
        if let Some(selected) = &self.selected_section {
            if let Some(value) = self.config.get(selected).and_then(|s| s.get(key)) {
                return Some(value);
            }
        }

        if let Some(value) = self.config.get(section).and_then(|s| s.get(key)) {
            return Some(value);
        }

        self.config.get("base").and_then(|s| s.get(key))
    }

    /// Select a named profile section that overrides every other section
    pub fn select_section(&mut self, section: String) {
        debug!("Selecting configuration section: {}", section);
        self.selected_section = Some(section);
    }

    /// Get boolean value with type conversion
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.get_value(section, key) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(anyhow::anyhow!("Invalid boolean value for {}.{}: {}", section, key, value)),
            },
            None => Ok(None),
        }
    }

    /// Get log level value with type conversion
    pub fn get_log_level(&self, section: &str, key: &str) -> Result<Option<log::LevelFilter>> {
        match self.get_value(section, key) {
            Some(value) => Ok(Some(crate::logging::parse_log_level(value)?)),
            None => Ok(None),
        }
    }

    /// Get path value with type conversion
    pub fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_value(section, key).map(PathBuf::from)
    }

    /// Get a list value; arrays are stored comma-joined
    pub fn get_list(&self, section: &str, key: &str) -> Vec<String> {
        self.get_value(section, key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ordered plugin ids from `[plugins] enabled`.
    ///
    /// The order is the import order: the first id ends up outermost in
    /// every chain. Listing a plugin twice is rejected.
    pub fn plugin_order(&self) -> Result<Vec<String>> {
        let order = self.get_list("plugins", "enabled");

        let mut seen = HashSet::new();
        for id in &order {
            if !seen.insert(id.as_str()) {
                return Err(PluginError::configuration_error(format!("plugin '{}' is enabled twice", id)))
                    .context("Invalid [plugins] enabled list");
            }
        }

        debug!("Configured plugin order: {:?}", order);
        Ok(order)
    }

    /// Registries for the configured plugin order, looked up in `catalog`
    pub fn resolve_plugins(&self, catalog: &PluginCatalog) -> Result<Vec<PluginRegistry>> {
        let order = self.plugin_order()?;
        catalog
            .resolve(&order)
            .context("Failed to resolve configured plugins")
    }

    /// Logger settings from `[logging]`
    pub fn log_config(&self) -> Result<LogConfig> {
        let mut config = LogConfig::default();

        if let Some(level) = self.get_log_level("logging", "console-level")? {
            config.console_level = level;
        }

        if let Some(format) = self.get_value("logging", "format") {
            config.format = format
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .context("Invalid logging.format value")?;
        }

        if let Some(path) = self.get_path("logging", "file") {
            config.file_level = Some(self.get_log_level("logging", "file-level")?.unwrap_or(log::LevelFilter::Debug));
            config.destination = if self.get_bool("logging", "console")?.unwrap_or(true) {
                LogDestination::Both(path)
            } else {
                LogDestination::File(path)
            };
        }

        Ok(config)
    }
}

/// Discover configuration files in order of precedence
fn discover_config_files() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Environment variable $POLYPHONY_CONFIG
    if let Ok(env_path) = env::var("POLYPHONY_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    // 2. XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyphony").join("config.toml"));
    }

    // 3. Home directory
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".polyphony.toml"));
    }

    // 4. Project local
    paths.push(PathBuf::from("./.polyphony.toml"));

    debug!("Config discovery paths: {:?}", paths);
    paths
}

/// Parse TOML content to string-based configuration
fn parse_toml_config(content: &str) -> Result<Configuration> {
    let toml_value: Value = content.parse().context("Failed to parse TOML content")?;

    let mut config = Configuration::new();

    if let Value::Table(table) = toml_value {
        flatten_toml_table(&table, String::new(), &mut config);
    }

    Ok(config)
}

/// Recursively flatten TOML tables into section.subsection format
fn flatten_toml_table(table: &toml::Table, prefix: String, config: &mut Configuration) {
    for (key, value) in table {
        let section_name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(subtable) => {
                if subtable.values().all(|v| !matches!(v, Value::Table(_))) {
                    let section = config.entry(section_name).or_default();
                    for (subkey, subvalue) in subtable {
                        section.insert(subkey.clone(), toml_value_to_string(subvalue));
                    }
                } else {
                    flatten_toml_table(subtable, section_name, config);
                }
            }
            _ => {
                // Top-level keys belong to [base]
                let section = if prefix.is_empty() { "base".to_string() } else { prefix.clone() };
                config
                    .entry(section)
                    .or_default()
                    .insert(key.clone(), toml_value_to_string(value));
            }
        }
    }
}

/// Convert TOML Value to string representation
fn toml_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Array(items) => items.iter().map(toml_value_to_string).collect::<Vec<_>>().join(","),
        Value::Table(_) | Value::Datetime(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginMetadata;
    use std::fs;
    use tempfile::NamedTempFile;

    fn manager(content: &str) -> ConfigManager {
        ConfigManager::from_config(parse_toml_config(content).unwrap())
    }

    #[test]
    fn test_toml_value_to_string_conversion() {
        assert_eq!(toml_value_to_string(&Value::String("hd".to_string())), "hd");
        assert_eq!(toml_value_to_string(&Value::Integer(42)), "42");
        assert_eq!(toml_value_to_string(&Value::Boolean(false)), "false");
        let array = Value::Array(vec![Value::String("a".into()), Value::String("b".into())]);
        assert_eq!(toml_value_to_string(&array), "a,b");
    }

    #[test]
    fn test_parse_toml_config() {
        let config = parse_toml_config(
            r#"
profile = "studio"

[plugins]
enabled = ["offline", "hd-artwork"]

[plugins.offline]
cache-dir = "/tmp/polyphony"
"#,
        )
        .unwrap();

        assert_eq!(config["base"]["profile"], "studio");
        assert_eq!(config["plugins"]["enabled"], "offline,hd-artwork");
        assert_eq!(config["plugins.offline"]["cache-dir"], "/tmp/polyphony");
    }

    #[test]
    fn test_value_falls_back_to_base_and_selected_section_wins() {
        let mut manager = manager(
            r#"
[base]
format = "text"

[logging]
console-level = "info"

[studio]
format = "json"
"#,
        );

        assert_eq!(manager.get_value("logging", "format").unwrap(), "text");
        assert_eq!(manager.get_value("logging", "console-level").unwrap(), "info");

        manager.select_section("studio".to_string());
        assert_eq!(manager.get_value("logging", "format").unwrap(), "json");
    }

    #[test]
    fn test_type_conversion() {
        let manager = manager(
            r#"
[base]
console = true
broken = "maybe"
level = "trace"
"#,
        );

        assert_eq!(manager.get_bool("base", "console").unwrap(), Some(true));
        assert!(manager.get_bool("base", "broken").is_err());
        assert!(manager.get_bool("base", "missing").unwrap().is_none());
        assert_eq!(manager.get_log_level("base", "level").unwrap(), Some(log::LevelFilter::Trace));
        assert!(manager.get_log_level("base", "broken").is_err());
    }

    #[test]
    fn test_plugin_order_keeps_declared_order() {
        let manager = manager("[plugins]\nenabled = [\"offline\", \"hd-artwork\", \"audit\"]\n");
        assert_eq!(manager.plugin_order().unwrap(), vec!["offline", "hd-artwork", "audit"]);

        let empty = ConfigManager::from_config(Configuration::new());
        assert!(empty.plugin_order().unwrap().is_empty());
    }

    #[test]
    fn test_plugin_order_rejects_duplicates() {
        let manager = manager("[plugins]\nenabled = [\"offline\", \"offline\"]\n");
        let error = manager.plugin_order().unwrap_err();
        assert!(error.downcast_ref::<PluginError>().is_some());
    }

    #[test]
    fn test_resolve_plugins_against_catalog() {
        let mut catalog = PluginCatalog::new();
        for id in ["offline", "audit"] {
            catalog
                .register(PluginRegistry::new(PluginMetadata::current(id, id)))
                .unwrap();
        }

        let resolved = manager("[plugins]\nenabled = [\"audit\", \"offline\"]\n")
            .resolve_plugins(&catalog)
            .unwrap();
        let ids: Vec<&str> = resolved.iter().map(|r| r.metadata().id.as_str()).collect();
        assert_eq!(ids, vec!["audit", "offline"]);

        let missing = manager("[plugins]\nenabled = [\"lyrics\"]\n").resolve_plugins(&catalog);
        assert!(missing.is_err());
    }

    #[test]
    fn test_log_config_from_logging_section() {
        let config = manager(
            r#"
[logging]
console-level = "error"
format = "json"
file = "/tmp/polyphony.log"
file-level = "trace"
"#,
        )
        .log_config()
        .unwrap();

        assert_eq!(config.console_level, log::LevelFilter::Error);
        assert_eq!(config.file_level, Some(log::LevelFilter::Trace));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.destination, LogDestination::Both(PathBuf::from("/tmp/polyphony.log")));

        let defaults = ConfigManager::from_config(Configuration::new()).log_config().unwrap();
        assert_eq!(defaults.destination, LogDestination::Console);
        assert!(manager("[logging]\nformat = \"yaml\"\n").log_config().is_err());
    }

    #[test]
    fn test_config_file_loading() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "[plugins]\nenabled = [\"offline\"]\n").unwrap();

        let manager = ConfigManager::load_from_file(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(manager.plugin_order().unwrap(), vec!["offline"]);
        assert_eq!(manager.config_file_path().unwrap(), temp_file.path());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "[plugins\nenabled = ").unwrap();

        let error = ConfigManager::load_from_file(temp_file.path().to_path_buf()).err().unwrap();
        assert!(format!("{:#}", error).contains("Failed to parse config file"));
    }
}
