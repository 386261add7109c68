//! Configuration management for plan-reflect
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/plan-reflect/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{PlanReflectError, Result};

/// Main configuration for plan-reflect
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Planner configuration
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Output rendering configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Whether the planning flow runs at all
    pub enabled: bool,
}

/// How processed responses are rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print thought parts alongside the visible answer
    pub show_thoughts: bool,
    /// Output format
    pub format: OutputFormat,
}

/// Output format for processed responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Visible text, thoughts optionally prefixed
    #[default]
    Text,
    /// The processed response as JSON
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is not set
    pub level: String,
    /// Whether to show debug output
    pub debug: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            enabled: env::var("PLAN_REFLECT_PLANNER_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_thoughts: env::var("PLAN_REFLECT_SHOW_THOUGHTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            format: OutputFormat::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("PLAN_REFLECT_LOG").unwrap_or_else(|_| "info".to_string()),
            debug: env::var("PLAN_REFLECT_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plan-reflect")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    ///
    /// A missing config file yields defaults; a file that cannot be read or
    /// parsed is an error.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load_or_default(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlanReflectError::config("Config file not found"));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PlanReflectError::config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| PlanReflectError::config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file();
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    PlanReflectError::config(format!("Failed to create config dir: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PlanReflectError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| PlanReflectError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        toml::to_string_pretty(&Config::default())
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }

    /// Filter directive used when RUST_LOG is not set
    pub fn log_filter(&self) -> &str {
        if self.logging.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }
}
