//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CAMX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deadband applied to the controller
    #[serde(default)]
    pub deadband: DeadbandConfig,
    /// Virtual layout sweep parameters
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Monitor loop parameters
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deadband: DeadbandConfig::default(),
            sweep: SweepConfig::default(),
            monitor: MonitorConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CAMX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CAMX_DEADBAND__ENABLED=true -> deadband.enabled = true
        figment = figment.merge(Env::prefixed("CAMX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Controller deadband configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadbandConfig {
    /// Apply the deadband to the controller at startup
    pub enabled: bool,
    /// Lower bound of the band (normalized)
    pub lower: f64,
    /// Upper bound of the band (normalized)
    pub upper: f64,
}

impl Default for DeadbandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lower: -0.05,
            upper: 0.05,
        }
    }
}

/// Virtual layout sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Peak raw value written to each control
    pub amplitude: f64,
    /// Seconds per full sweep cycle
    pub period_s: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            period_s: 4.0,
        }
    }
}

/// Monitor loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Number of frames to run before exiting
    pub frames: u32,
    /// Milliseconds between frames
    pub interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            interval_ms: 50,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
