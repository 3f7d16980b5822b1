//! Layered configuration for the entity model.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from chorus.toml)
//! - ~/.config/chorus/chorus.toml
//! - ./chorus.toml

use chorus_cache::CacheConfig;
use chorus_core::TelemetryConfig;
use chorus_error::{ChorusError, ChorusResult, ConfigError};
use chorus_interface::Backend;
use chorus_model::{Chorus, ModelConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../chorus.toml");

/// Top-level Chorus configuration.
///
/// Every section is optional in a user file; missing keys keep their defaults.
///
/// # Example
///
/// ```no_run
/// use chorus::ChorusConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ChorusConfig::load()?;
/// println!("Jump window: {}", config.model().max_messages_per_channel());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ChorusConfig {
    /// Entity behavior
    #[serde(default)]
    #[builder(default)]
    model: ModelConfig,

    /// Identity cache tuning
    #[serde(default)]
    #[builder(default)]
    cache: CacheConfig,

    /// Logging
    #[serde(default)]
    #[builder(default)]
    telemetry: TelemetryConfig,
}

impl ChorusConfig {
    /// Load configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ChorusResult<Self> {
        debug!("Loading configuration from file");

        let path = path.as_ref();
        Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ChorusError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChorusError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load bundled defaults, then the home directory file, then the
    /// current directory file. User files are optional.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a present file fails to parse.
    #[instrument]
    pub fn load() -> ChorusResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/chorus/chorus.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("chorus").required(false));

        Self::finish(builder)
    }

    /// Load bundled defaults with one optional override file on top.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the override exists and fails to parse.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_with_override(path: impl AsRef<Path>) -> ChorusResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(false));

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ChorusResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ChorusError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChorusError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Build an entity model context over `backend` with these settings.
    pub fn context(&self, backend: Arc<dyn Backend>) -> Chorus {
        Chorus::with_config(backend, self.model.clone(), self.cache.clone())
    }

    /// Install the tracing subscriber described by the `[telemetry]` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the filter is invalid or a subscriber is
    /// already installed.
    pub fn init_telemetry(&self) -> ChorusResult<()> {
        chorus_core::init_telemetry(&self.telemetry)
    }
}
