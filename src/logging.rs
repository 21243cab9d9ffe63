// Logging module for polyphony
// Provides a `log` backend with timestamped text or JSON lines
//
// The library itself only emits through the `log` facade. Hosts that do not
// bring their own logger can install this one:
// - Text or JSON output
// - Console (stderr), file, or both
// - Independent levels for console and file output
// - The emitting module path is kept as the record target
//
// Example usage:
// ```
// let config = LogConfig {
//     console_level: LevelFilter::Info,
//     file_level: Some(LevelFilter::Trace),
//     format: LogFormat::Json,
//     destination: LogDestination::Both(PathBuf::from("polyphony.log")),
// };
// init_logger(config)?;
// log::debug!("Finalized registry");
// ```

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};

/// Log output format options
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Valid options: text, json", s)),
        }
    }
}

/// Log destination options
#[derive(Debug, Clone, PartialEq)]
pub enum LogDestination {
    Console,
    File(PathBuf),
    Both(PathBuf),
}

/// One JSON log line
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    pub file_level: Option<LevelFilter>,
    pub format: LogFormat,
    pub destination: LogDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Warn,
            file_level: None,
            format: LogFormat::Text,
            destination: LogDestination::Console,
        }
    }
}

impl LogConfig {
    /// Most verbose level any destination accepts
    pub fn max_level(&self) -> LevelFilter {
        match self.file_level {
            Some(file_level) if file_level > self.console_level => file_level,
            _ => self.console_level,
        }
    }
}

/// `log` backend writing to stderr and/or a file
pub struct PolyphonyLogger {
    config: LogConfig,
}

impl PolyphonyLogger {
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    fn format_timestamp() -> String {
        let now: DateTime<Local> = Local::now();
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn format_text_message(&self, level: Level, target: &str, message: &str) -> String {
        format!(
            "{} [{}] {}: {}",
            Self::format_timestamp(),
            level.to_string().to_uppercase(),
            target,
            message
        )
    }

    fn format_json_message(&self, level: Level, target: &str, message: &str) -> Result<String> {
        let entry = JsonLogEntry {
            timestamp: Self::format_timestamp(),
            level: level.to_string().to_uppercase(),
            target: target.to_string(),
            message: message.to_string(),
        };

        serde_json::to_string(&entry).context("Failed to serialize log entry to JSON")
    }

    fn should_log_to_console(&self, level: Level) -> bool {
        match self.config.destination {
            LogDestination::File(_) => false,
            _ => level <= self.config.console_level,
        }
    }

    fn should_log_to_file(&self, level: Level) -> bool {
        match (&self.config.destination, self.config.file_level) {
            (LogDestination::Console, _) | (_, None) => false,
            (_, Some(file_level)) => level <= file_level,
        }
    }

    fn file_path(&self) -> Option<&PathBuf> {
        match &self.config.destination {
            LogDestination::Console => None,
            LogDestination::File(path) | LogDestination::Both(path) => Some(path),
        }
    }

    fn write_to_console(&self, formatted_message: &str) -> Result<()> {
        writeln!(io::stderr(), "{}", formatted_message).context("Failed to write to console")
    }

    fn write_to_file(&self, formatted_message: &str, file_path: &PathBuf) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .with_context(|| format!("Failed to open log file: {}", file_path.display()))?;

        writeln!(file, "{}", formatted_message).context("Failed to write to log file")
    }
}

impl log::Log for PolyphonyLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.should_log_to_console(metadata.level()) || self.should_log_to_file(metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let level = record.level();
        let target = record.target();

        let formatted_message = match self.config.format {
            LogFormat::Text => self.format_text_message(level, target, &message),
            LogFormat::Json => match self.format_json_message(level, target, &message) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("JSON formatting error: {}. Falling back to text format.", e);
                    self.format_text_message(level, target, &message)
                }
            },
        };

        if self.should_log_to_console(level) {
            if let Err(e) = self.write_to_console(&formatted_message) {
                eprintln!("Console logging error: {}", e);
            }
        }

        if self.should_log_to_file(level) {
            if let Some(path) = self.file_path() {
                if let Err(e) = self.write_to_file(&formatted_message, path) {
                    eprintln!("File logging error: {}", e);
                }
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Install [`PolyphonyLogger`] as the global `log` backend
pub fn init_logger(config: LogConfig) -> Result<()> {
    let max_level = config.max_level();
    let logger = PolyphonyLogger::new(config);

    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(max_level);

    Ok(())
}

/// Convert string to LevelFilter
pub fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        "off" => Ok(LevelFilter::Off),
        _ => Err(anyhow::anyhow!(
            "Invalid log level: {}. Valid levels: error, warn, info, debug, trace, off",
            level_str
        )),
    }
}
