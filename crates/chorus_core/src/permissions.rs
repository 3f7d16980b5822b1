//! Permission bitmask and effective-permission resolution.

use crate::{GuildId, GuildRecord, MemberRecord, OverwriteKind, OverwriteRecord, RoleId, RoleRecord};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, instrument};

bitflags::bitflags! {
    /// Guild permission bits, using the backend's bit positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u64 {
        /// Create invites
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Kick members
        const KICK_MEMBERS = 1 << 1;
        /// Ban members
        const BAN_MEMBERS = 1 << 2;
        /// Implicitly grants every permission
        const ADMINISTRATOR = 1 << 3;
        /// Edit and delete channels
        const MANAGE_CHANNELS = 1 << 4;
        /// Edit guild settings
        const MANAGE_GUILD = 1 << 5;
        /// Add reactions
        const ADD_REACTIONS = 1 << 6;
        /// Read the audit log
        const VIEW_AUDIT_LOG = 1 << 7;
        /// Priority speaker in voice
        const PRIORITY_SPEAKER = 1 << 8;
        /// Stream video in voice
        const STREAM = 1 << 9;
        /// See the channel at all
        const VIEW_CHANNEL = 1 << 10;
        /// Post messages
        const SEND_MESSAGES = 1 << 11;
        /// Post text-to-speech messages
        const SEND_TTS_MESSAGES = 1 << 12;
        /// Delete or pin others' messages
        const MANAGE_MESSAGES = 1 << 13;
        /// Links get embeds
        const EMBED_LINKS = 1 << 14;
        /// Upload files
        const ATTACH_FILES = 1 << 15;
        /// Read older messages
        const READ_MESSAGE_HISTORY = 1 << 16;
        /// Mention @everyone
        const MENTION_EVERYONE = 1 << 17;
        /// Use emojis from other guilds
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        /// Join voice channels
        const CONNECT = 1 << 20;
        /// Talk in voice channels
        const SPEAK = 1 << 21;
        /// Mute others in voice
        const MUTE_MEMBERS = 1 << 22;
        /// Deafen others in voice
        const DEAFEN_MEMBERS = 1 << 23;
        /// Move others between voice channels
        const MOVE_MEMBERS = 1 << 24;
        /// Voice activity detection
        const USE_VAD = 1 << 25;
        /// Change own nickname
        const CHANGE_NICKNAME = 1 << 26;
        /// Change others' nicknames
        const MANAGE_NICKNAMES = 1 << 27;
        /// Edit roles below one's own
        const MANAGE_ROLES = 1 << 28;
        /// Manage webhooks
        const MANAGE_WEBHOOKS = 1 << 29;
        /// Manage emojis and stickers
        const MANAGE_EMOJIS = 1 << 30;
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBits {
    Number(u64),
    Text(String),
}

// The backend sends bitmasks as decimal strings; unknown bits are retained.
impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = match RawBits::deserialize(deserializer)? {
            RawBits::Number(n) => n,
            RawBits::Text(s) => s.parse::<u64>().map_err(serde::de::Error::custom)?,
        };
        Ok(Permissions::from_bits_retain(bits))
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.bits().to_string())
    }
}

/// Named capabilities checked before guarded channel operations.
///
/// The name is what a denial reports; the bitmask is what must be held.
///
/// # Examples
///
/// ```
/// use chorus_core::{Capability, Permissions};
///
/// assert_eq!(Capability::SendMessages.to_string(), "SEND_MESSAGES");
/// assert!(Capability::SendMessages.required().contains(Permissions::VIEW_CHANNEL));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// See the channel
    ViewChannel,
    /// See the channel and post in it
    SendMessages,
}

impl Capability {
    /// Bits that must all be present for the capability to hold.
    pub fn required(self) -> Permissions {
        match self {
            Self::ViewChannel => Permissions::VIEW_CHANNEL,
            Self::SendMessages => Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
        }
    }
}

/// Resolves a member's effective permissions in a guild and its channels.
///
/// Resolution order:
/// 1. The guild owner holds everything.
/// 2. Base permissions are the `@everyone` role plus the member's roles.
/// 3. `ADMINISTRATOR` in the base grants everything.
/// 4. Channel overwrites apply `@everyone`, then the member's roles combined,
///    then the member's own entry; each step removes `deny` and adds `allow`.
/// 5. A channel the member cannot view grants nothing.
pub struct PermissionResolver<'a> {
    guild_id: GuildId,
    owner: bool,
    roles: &'a [RoleRecord],
    member: &'a MemberRecord,
}

impl<'a> PermissionResolver<'a> {
    /// Create a resolver for one member of one guild.
    pub fn new(guild: &GuildRecord, roles: &'a [RoleRecord], member: &'a MemberRecord) -> Self {
        Self {
            guild_id: guild.id,
            owner: guild.owner_id == member.user_id,
            roles,
            member,
        }
    }

    fn holds_role(&self, role: RoleId) -> bool {
        role == RoleId::from(self.guild_id) || self.member.roles.contains(&role)
    }

    /// Guild-level permissions before any channel overwrite.
    pub fn base(&self) -> Permissions {
        if self.owner {
            return Permissions::all();
        }

        let base = self
            .roles
            .iter()
            .filter(|role| self.holds_role(role.id))
            .fold(Permissions::empty(), |acc, role| acc | role.permissions);

        if base.contains(Permissions::ADMINISTRATOR) {
            Permissions::all()
        } else {
            base
        }
    }

    /// Effective permissions in a channel with the given overwrites.
    #[instrument(skip(self, overwrites), fields(guild_id = %self.guild_id, user_id = %self.member.user_id))]
    pub fn for_channel(&self, overwrites: &[OverwriteRecord]) -> Permissions {
        let base = self.base();
        if base == Permissions::all() {
            return base;
        }

        let everyone = self.guild_id.get();
        let mut perms = base;

        if let Some(entry) = overwrites
            .iter()
            .find(|o| o.id == everyone && OverwriteKind::parse(&o.kind) == OverwriteKind::Role)
        {
            perms = (perms - entry.deny) | entry.allow;
        }

        let (role_allow, role_deny) = overwrites
            .iter()
            .filter(|o| OverwriteKind::parse(&o.kind) == OverwriteKind::Role && o.id != everyone)
            .filter(|o| self.member.roles.contains(&RoleId(o.id)))
            .fold((Permissions::empty(), Permissions::empty()), |(allow, deny), o| {
                (allow | o.allow, deny | o.deny)
            });
        perms = (perms - role_deny) | role_allow;

        if let Some(entry) = overwrites.iter().find(|o| {
            o.id == self.member.user_id.get() && OverwriteKind::parse(&o.kind) == OverwriteKind::Member
        }) {
            perms = (perms - entry.deny) | entry.allow;
        }

        if !perms.contains(Permissions::VIEW_CHANNEL) {
            debug!("Channel is not viewable, no permissions apply");
            return Permissions::empty();
        }

        debug!(bits = perms.bits(), "Resolved channel permissions");
        perms
    }
}
