//! Permission overwrite entities.
//!
//! Overwrites are not identity-cached. They are rebuilt from the owning
//! channel's record on every access and refer to that channel by id.

use crate::{Channel, ChannelInfo, Chorus, Guild, GuildChannel, GuildMember, Role};
use chorus_core::{ChannelId, OverwriteKind, OverwriteRecord, Permissions, RoleId, UserId};

/// Fields shared by every overwrite variant.
#[derive(Debug, Clone)]
pub struct OverwriteEntry {
    context: Chorus,
    channel_id: ChannelId,
    record: OverwriteRecord,
}

impl PartialEq for OverwriteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.channel_id == other.channel_id && self.record == other.record
    }
}

impl OverwriteEntry {
    fn new(context: Chorus, channel_id: ChannelId, record: OverwriteRecord) -> Self {
        Self {
            context,
            channel_id,
            record,
        }
    }

    /// The raw entry.
    pub fn record(&self) -> &OverwriteRecord {
        &self.record
    }
}

/// Accessors shared by every overwrite variant.
pub trait OverwriteInfo {
    /// Shared fields.
    fn entry(&self) -> &OverwriteEntry;

    /// Target id: a role id or a user id depending on the kind.
    fn target_id(&self) -> u64 {
        self.entry().record.id
    }

    /// Parsed discriminant.
    fn kind(&self) -> OverwriteKind {
        OverwriteKind::parse(&self.entry().record.kind)
    }

    /// Bits explicitly granted.
    fn allow(&self) -> Permissions {
        self.entry().record.allow
    }

    /// Bits explicitly removed.
    fn deny(&self) -> Permissions {
        self.entry().record.deny
    }

    /// Id of the owning channel.
    fn channel_id(&self) -> ChannelId {
        self.entry().channel_id
    }

    /// The owning channel, looked up by id.
    fn channel(&self) -> Option<Channel> {
        let entry = self.entry();
        entry.context.channel_from_id(entry.channel_id)
    }

    /// The owning channel's guild.
    fn guild(&self) -> Option<Guild> {
        let channel = self.channel()?;
        match channel.as_guild_channel() {
            Some(guild_channel) => guild_channel.guild(),
            None => channel
                .guild_id()
                .and_then(|id| self.entry().context.guild_from_id(id)),
        }
    }
}

/// Overwrite scoped to everyone holding a role.
#[derive(Debug, Clone, PartialEq)]
pub struct RolePermissionOverwrite(OverwriteEntry);

impl RolePermissionOverwrite {
    /// The role this entry applies to.
    pub fn role_id(&self) -> RoleId {
        RoleId(self.0.record.id)
    }

    /// The role, found among the guild's roles.
    pub fn role(&self) -> Option<Role> {
        let role_id = self.role_id();
        self.guild()?
            .roles()
            .into_iter()
            .find(|role| role.id() == role_id)
    }
}

/// Overwrite scoped to a single guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPermissionOverwrite(OverwriteEntry);

impl MemberPermissionOverwrite {
    /// The user this entry applies to.
    pub fn member_id(&self) -> UserId {
        UserId(self.0.record.id)
    }

    /// The user's membership in the owning channel's guild.
    pub fn member(&self) -> Option<GuildMember> {
        self.guild()?.member(self.member_id())
    }
}

/// Overwrite with a discriminant the model does not recognize.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePermissionOverwrite(OverwriteEntry);

impl OverwriteInfo for RolePermissionOverwrite {
    fn entry(&self) -> &OverwriteEntry {
        &self.0
    }
}

impl OverwriteInfo for MemberPermissionOverwrite {
    fn entry(&self) -> &OverwriteEntry {
        &self.0
    }
}

impl OverwriteInfo for BasePermissionOverwrite {
    fn entry(&self) -> &OverwriteEntry {
        &self.0
    }
}

/// A channel permission overwrite of any kind.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum PermissionOverwrite {
    /// Applies to a role
    Role(RolePermissionOverwrite),
    /// Applies to a member
    Member(MemberPermissionOverwrite),
    /// Unrecognized discriminant
    Base(BasePermissionOverwrite),
}

impl PermissionOverwrite {
    /// Build the variant the entry's discriminant selects.
    ///
    /// Accepts `role` / `member` and their numeric forms; anything else
    /// becomes [`PermissionOverwrite::Base`].
    pub fn from_record(context: Chorus, channel_id: ChannelId, record: OverwriteRecord) -> Self {
        let kind = OverwriteKind::parse(&record.kind);
        let entry = OverwriteEntry::new(context, channel_id, record);
        match kind {
            OverwriteKind::Role => RolePermissionOverwrite(entry).into(),
            OverwriteKind::Member => MemberPermissionOverwrite(entry).into(),
            OverwriteKind::Unknown(raw) => {
                tracing::debug!(%channel_id, kind = %raw, "Unrecognized overwrite kind");
                BasePermissionOverwrite(entry).into()
            }
        }
    }

    /// The role variant.
    pub fn as_role(&self) -> Option<&RolePermissionOverwrite> {
        match self {
            Self::Role(o) => Some(o),
            _ => None,
        }
    }

    /// The member variant.
    pub fn as_member(&self) -> Option<&MemberPermissionOverwrite> {
        match self {
            Self::Member(o) => Some(o),
            _ => None,
        }
    }
}

impl OverwriteInfo for PermissionOverwrite {
    fn entry(&self) -> &OverwriteEntry {
        match self {
            Self::Role(o) => o.entry(),
            Self::Member(o) => o.entry(),
            Self::Base(o) => o.entry(),
        }
    }
}
