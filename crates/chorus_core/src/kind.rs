//! Discriminants that select entity variants.

/// Channel discriminant as carried in the record's `type` field.
///
/// The set the model knows about is closed; anything else is kept as
/// [`ChannelKind::Unknown`] so newer backend kinds degrade to the generic
/// channel instead of failing.
///
/// # Examples
///
/// ```
/// use chorus_core::ChannelKind;
///
/// assert_eq!(ChannelKind::from(2), ChannelKind::GuildVoice);
/// assert_eq!(ChannelKind::from(13), ChannelKind::Unknown(13));
/// assert_eq!(ChannelKind::GuildCategory.to_string(), "GUILD_CATEGORY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChannelKind {
    /// Type 0
    #[display("GUILD_TEXT")]
    GuildText,
    /// Type 1
    #[display("DM")]
    DirectMessage,
    /// Type 2
    #[display("GUILD_VOICE")]
    GuildVoice,
    /// Type 3
    #[display("GROUP_DM")]
    GroupDirectMessage,
    /// Type 4
    #[display("GUILD_CATEGORY")]
    GuildCategory,
    /// Any discriminant this model does not specialize.
    #[display("UNKNOWN({})", _0)]
    Unknown(u8),
}

impl ChannelKind {
    /// The raw wire discriminant.
    pub fn discriminant(self) -> u8 {
        match self {
            Self::GuildText => 0,
            Self::DirectMessage => 1,
            Self::GuildVoice => 2,
            Self::GroupDirectMessage => 3,
            Self::GuildCategory => 4,
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether channels of this kind always live inside a guild.
    pub fn is_guild(self) -> bool {
        matches!(
            self,
            Self::GuildText | Self::GuildVoice | Self::GuildCategory
        )
    }

    /// Whether channels of this kind are private conversations.
    pub fn is_private(self) -> bool {
        matches!(self, Self::DirectMessage | Self::GroupDirectMessage)
    }
}

impl From<u8> for ChannelKind {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::GuildText,
            1 => Self::DirectMessage,
            2 => Self::GuildVoice,
            3 => Self::GroupDirectMessage,
            4 => Self::GuildCategory,
            other => Self::Unknown(other),
        }
    }
}

/// Permission overwrite discriminant.
///
/// Accepts the string form (`"role"` / `"member"`) and the numeric wire form
/// (`"0"` / `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OverwriteKind {
    /// Overwrite applies to everyone holding a role
    #[display("role")]
    Role,
    /// Overwrite applies to a single member
    #[display("member")]
    Member,
    /// Anything else
    #[display("{}", _0)]
    Unknown(String),
}

impl OverwriteKind {
    /// Parse the raw discriminant. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "role" | "0" => Self::Role,
            "member" | "1" => Self::Member,
            other => Self::Unknown(other.to_string()),
        }
    }
}
