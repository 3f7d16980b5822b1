//! Value types exchanged with the store collaborators.

use chorus_core::GuildId;
use serde::{Deserialize, Serialize};

/// Outgoing message body handed to the transport.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct MessagePayload {
    /// Text to post
    content: String,
    /// Text-to-speech flag
    tts: bool,
    /// Emoji names the formatter could not resolve
    invalid_emojis: Vec<String>,
}

impl MessagePayload {
    /// Payload that posts `content` exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use chorus_interface::MessagePayload;
    ///
    /// let payload = MessagePayload::literal("**not** parsed");
    /// assert_eq!(payload.content(), "**not** parsed");
    /// assert!(!payload.tts());
    /// ```
    pub fn literal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Where navigation should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NavigationTarget {
    /// A guild's channel list
    #[display("{}", _0)]
    Guild(GuildId),
    /// The private-conversation area (no guild)
    #[display("@me")]
    Home,
}

impl From<Option<GuildId>> for NavigationTarget {
    fn from(guild: Option<GuildId>) -> Self {
        guild.map_or(Self::Home, Self::Guild)
    }
}

/// Sections of the channel settings surface.
///
/// # Examples
///
/// ```
/// use chorus_interface::SettingsSection;
///
/// assert_eq!(SettingsSection::default().as_ref(), "OVERVIEW");
/// assert_eq!("PERMISSIONS".parse::<SettingsSection>().unwrap(), SettingsSection::Permissions);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingsSection {
    /// Name, topic, slowmode
    #[default]
    Overview,
    /// Permission overwrites
    Permissions,
    /// Active invites
    Invites,
    /// Webhooks and followed channels
    Integrations,
    /// Deletion confirmation
    Delete,
}
