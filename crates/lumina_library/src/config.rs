//! Configuration for the Lumina reading list.
//!
//! This module provides TOML-based configuration. The configuration
//! system supports:
//! - Bundled defaults (include_str! from lumina.toml)
//! - User overrides (./lumina.toml or ~/.config/lumina/lumina.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use lumina_error::{ConfigError, LuminaError, LuminaResult};
use lumina_storage::JsonShelfStore;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

fn default_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Top-level Lumina configuration.
///
/// Loads settings from TOML files with a precedence system:
/// 1. Bundled defaults (lumina.toml shipped with the crate)
/// 2. User config in home directory (~/.config/lumina/lumina.toml)
/// 3. User config in current directory (./lumina.toml)
///
/// # Example
///
/// ```no_run
/// use lumina_library::LuminaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LuminaConfig::load()?;
/// println!("Using model {}", config.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Getters, Builder)]
#[builder(setter(into, strip_option))]
pub struct LuminaConfig {
    /// Model used for insight generation
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,

    /// Sampling temperature passed through to the provider
    #[serde(default)]
    #[builder(default)]
    temperature: Option<f32>,

    /// Output token cap passed through to the provider
    #[serde(default)]
    #[builder(default)]
    max_tokens: Option<u32>,

    /// Directory holding the shelf file (platform data dir when unset)
    #[serde(default)]
    #[builder(default)]
    data_dir: Option<PathBuf>,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    #[builder(default = "default_tick_rate_ms()")]
    tick_rate_ms: u64,
}

impl LuminaConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LuminaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                LuminaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LuminaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (lumina.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/lumina/lumina.toml)
    /// 3. User config in current directory (./lumina.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> LuminaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../lumina.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lumina/lumina.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("lumina").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                LuminaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LuminaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Resolve the shelf file path this configuration points at.
    ///
    /// Uses `data_dir` when set, otherwise the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error on platforms with no data directory when `data_dir`
    /// is unset.
    pub fn shelf_path(&self) -> LuminaResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.join("books.json")),
            None => JsonShelfStore::default_path(),
        }
    }
}
