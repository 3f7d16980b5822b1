//! Raw backing records as the live store holds them.
//!
//! These mirror the backend's JSON payloads. The store owns and mutates them;
//! the entity model only reads through a [`RecordCell`](crate::RecordCell).
//! Fields are public because the store is free to patch them in place.

use crate::ids::{deserialize_optional_snowflake, deserialize_snowflake};
use crate::{ChannelId, GuildId, MessageId, Permissions, RoleId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDiscriminant {
    Number(u64),
    Text(String),
}

fn deserialize_discriminant<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDiscriminant::deserialize(deserializer)? {
        RawDiscriminant::Number(n) => n.to_string(),
        RawDiscriminant::Text(s) => s,
    })
}

/// A permission overwrite entry inside a channel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OverwriteRecord {
    /// Role id or user id, depending on `kind`
    #[serde(deserialize_with = "deserialize_snowflake")]
    pub id: u64,
    /// `role` / `member` (or `0` / `1` on the wire)
    #[serde(rename = "type", deserialize_with = "deserialize_discriminant")]
    pub kind: String,
    /// Bits explicitly granted
    #[serde(default)]
    #[builder(default)]
    pub allow: Permissions,
    /// Bits explicitly removed
    #[serde(default)]
    #[builder(default)]
    pub deny: Permissions,
}

/// A channel of any kind.
///
/// # Examples
///
/// ```
/// use chorus_core::{ChannelRecord, GuildId};
///
/// let record: ChannelRecord = serde_json::from_str(
///     r#"{"id": "10", "type": 0, "name": "general", "guild_id": "1"}"#,
/// ).unwrap();
/// assert_eq!(record.kind, 0);
/// assert_eq!(record.guild_id, Some(GuildId(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChannelRecord {
    /// Channel id
    pub id: ChannelId,
    /// Raw discriminant (see [`ChannelKind`](crate::ChannelKind))
    #[serde(rename = "type")]
    pub kind: u8,
    /// Display name (absent for direct messages)
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Application that created the channel, if any
    #[serde(default, deserialize_with = "deserialize_optional_snowflake")]
    #[builder(default, setter(into, strip_option))]
    pub application_id: Option<u64>,
    /// Owning guild
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub guild_id: Option<GuildId>,
    /// Parent category
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub parent_id: Option<ChannelId>,
    /// Sort position within the guild
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub position: Option<i32>,
    /// Text channel topic
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub topic: Option<String>,
    /// Age-restricted flag
    #[serde(default)]
    #[builder(default)]
    pub nsfw: bool,
    /// Voice channel user cap (0 means unlimited)
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub user_limit: Option<u32>,
    /// Voice channel bitrate in bits per second
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub bitrate: Option<u32>,
    /// Participants of a private channel, excluding the acting user
    #[serde(default)]
    #[builder(default)]
    pub recipients: Vec<UserId>,
    /// Creator of a group conversation
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub owner_id: Option<UserId>,
    /// Group conversation icon hash
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub icon: Option<String>,
    /// Access-control entries
    #[serde(default)]
    #[builder(default)]
    pub permission_overwrites: Vec<OverwriteRecord>,
    /// Most recent message id
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub last_message_id: Option<MessageId>,
    /// Per-conversation nicknames in a group conversation
    #[serde(default)]
    #[builder(default)]
    pub nicks: HashMap<UserId, String>,
}

/// A guild (server).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GuildRecord {
    /// Guild id, also the id of its `@everyone` role
    pub id: GuildId,
    /// Guild name
    pub name: String,
    /// Owning user
    pub owner_id: UserId,
    /// Icon hash
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub icon: Option<String>,
    /// Description shown in discovery
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
}

/// A role within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RoleRecord {
    /// Role id
    pub id: RoleId,
    /// Role name
    pub name: String,
    /// Guild-level permissions granted by the role
    #[serde(default)]
    #[builder(default)]
    pub permissions: Permissions,
    /// Hierarchy position
    #[serde(default)]
    #[builder(default)]
    pub position: i32,
    /// RGB color, 0 for none
    #[serde(default)]
    #[builder(default)]
    pub color: u32,
    /// Displayed separately in the member list
    #[serde(default)]
    #[builder(default)]
    pub hoist: bool,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct UserRecord {
    /// User id
    pub id: UserId,
    /// Account name
    pub username: String,
    /// Legacy four-digit discriminator
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub discriminator: Option<String>,
    /// Display name
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub global_name: Option<String>,
    /// Avatar hash
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub avatar: Option<String>,
    /// Bot account flag
    #[serde(default)]
    #[builder(default)]
    pub bot: bool,
}

/// A user's membership in a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct MemberRecord {
    /// Guild the membership belongs to
    pub guild_id: GuildId,
    /// Member's user id
    pub user_id: UserId,
    /// Guild-specific nickname
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub nick: Option<String>,
    /// Roles held, excluding `@everyone`
    #[serde(default)]
    #[builder(default)]
    pub roles: Vec<RoleId>,
    /// When the user joined
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub joined_at: Option<DateTime<Utc>>,
}

/// A message in a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct MessageRecord {
    /// Message id
    pub id: MessageId,
    /// Channel the message lives in
    pub channel_id: ChannelId,
    /// Author
    pub author_id: UserId,
    /// Text content
    #[serde(default)]
    #[builder(default)]
    pub content: String,
    /// Creation time
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub timestamp: Option<DateTime<Utc>>,
    /// Last edit time
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub edited_timestamp: Option<DateTime<Utc>>,
    /// Text-to-speech flag
    #[serde(default)]
    #[builder(default)]
    pub tts: bool,
    /// Synthesized locally and visible only to the acting user
    #[serde(default)]
    #[builder(default)]
    pub local_only: bool,
}
