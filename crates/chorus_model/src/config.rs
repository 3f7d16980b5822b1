//! Entity model configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Tunables for entity behavior.
///
/// # Examples
///
/// ```
/// use chorus_model::ModelConfig;
///
/// let config = ModelConfig::default().with_max_messages_per_channel(100usize);
/// assert_eq!(*config.max_messages_per_channel(), 100);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ModelConfig {
    /// How many messages a jump to the present may load
    #[serde(default = "default_max_messages_per_channel")]
    #[builder(default = "default_max_messages_per_channel()")]
    max_messages_per_channel: usize,
}

fn default_max_messages_per_channel() -> usize {
    50
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_messages_per_channel: default_max_messages_per_channel(),
        }
    }
}
