//! Tracing subscriber setup.

use chorus_error::{ChorusResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct TelemetryConfig {
    /// Filter directives used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    #[builder(default = "default_filter()", setter(into))]
    filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    #[builder(default)]
    json: bool,

    /// Include the event target (module path)
    #[serde(default = "default_with_target")]
    #[builder(default = "default_with_target()")]
    with_target: bool,
}

fn default_filter() -> String {
    "info,chorus=debug".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
            with_target: default_with_target(),
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> ChorusResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            ConfigError::new(format!("Invalid log filter '{}': {}", config.filter, e))
        })?,
    };

    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::debug!(json = config.json, "Telemetry initialized");
    Ok(())
}
