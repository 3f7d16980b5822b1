//! Snowflake identifiers for store records.
//!
//! Each record family gets its own newtype so a role id can never be passed
//! where a user id is expected. Ids deserialize from either a JSON number or
//! the string form the backend uses on the wire.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnowflake {
    Number(u64),
    Text(String),
}

pub(crate) fn deserialize_snowflake<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawSnowflake::deserialize(deserializer)? {
        RawSnowflake::Number(n) => Ok(n),
        RawSnowflake::Text(s) => s.parse::<u64>().map_err(serde::de::Error::custom),
    }
}

/// Like [`deserialize_snowflake`] for optional ids; `null` maps to `None`.
pub(crate) fn deserialize_optional_snowflake<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawSnowflake>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawSnowflake::Number(n)) => Ok(Some(n)),
        Some(RawSnowflake::Text(s)) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
    }
}

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "deserialize_snowflake")] pub u64);

        impl $name {
            /// Raw numeric value.
            pub fn get(self) -> u64 {
                self.0
            }
        }
    };
}

snowflake!(
    /// Identifies a channel of any kind.
    ChannelId
);
snowflake!(
    /// Identifies a guild (server). The guild's `@everyone` role shares this id.
    GuildId
);
snowflake!(
    /// Identifies a user account.
    UserId
);
snowflake!(
    /// Identifies a guild role.
    RoleId
);
snowflake!(
    /// Identifies a message within a channel.
    MessageId
);

impl From<GuildId> for RoleId {
    /// The `@everyone` role of a guild.
    fn from(guild: GuildId) -> Self {
        RoleId(guild.0)
    }
}
