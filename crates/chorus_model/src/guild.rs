//! Guilds, roles and memberships.

use crate::{Channel, Chorus, User};
use chorus_core::{
    GuildId, GuildRecord, MemberRecord, PermissionResolver, Permissions, RecordCell, RoleId,
    RoleRecord, UserId,
};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct GuildCore {
    context: Chorus,
    record: RecordCell<GuildRecord>,
}

impl GuildCore {
    pub(crate) fn new(context: Chorus, record: RecordCell<GuildRecord>) -> Self {
        Self { context, record }
    }

    pub(crate) fn record(&self) -> &RecordCell<GuildRecord> {
        &self.record
    }
}

/// A guild (server). Identity-cached: one live handle per record.
#[derive(Debug, Clone)]
pub struct Guild {
    core: Arc<GuildCore>,
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for Guild {}

impl Guild {
    pub(crate) fn new(core: Arc<GuildCore>) -> Self {
        Self { core }
    }

    fn context(&self) -> &Chorus {
        &self.core.context
    }

    /// Guild id.
    pub fn id(&self) -> GuildId {
        self.core.record.read(|r| r.id)
    }

    /// Guild name.
    pub fn name(&self) -> String {
        self.core.record.read(|r| r.name.clone())
    }

    /// Icon hash.
    pub fn icon(&self) -> Option<String> {
        self.core.record.read(|r| r.icon.clone())
    }

    /// Owning user's id.
    pub fn owner_id(&self) -> UserId {
        self.core.record.read(|r| r.owner_id)
    }

    /// Owning user.
    pub fn owner(&self) -> Option<User> {
        self.context().user_from_id(self.owner_id())
    }

    /// Roles, including `@everyone`.
    pub fn roles(&self) -> Vec<Role> {
        let id = self.id();
        self.context()
            .backend()
            .roles(id)
            .into_iter()
            .map(|record| Role::new(self.context().clone(), id, record))
            .collect()
    }

    /// Channels, in the guild's display order.
    pub fn channels(&self) -> Vec<Channel> {
        let context = self.context();
        context
            .backend()
            .guild_channels(self.id())
            .into_iter()
            .map(|record| context.channel(record))
            .collect()
    }

    /// The channel new members land in.
    pub fn default_channel(&self) -> Option<Channel> {
        let context = self.context();
        context
            .backend()
            .default_channel(self.id())
            .and_then(|id| context.channel_from_id(id))
    }

    /// A user's membership.
    pub fn member(&self, user_id: UserId) -> Option<GuildMember> {
        self.context()
            .backend()
            .member(self.id(), user_id)
            .map(|record| GuildMember::new(self.context().clone(), record))
    }

    /// The acting user's membership.
    pub fn current_member(&self) -> Option<GuildMember> {
        self.context()
            .backend()
            .current_user_id()
            .and_then(|id| self.member(id))
    }

    /// Whether this is the application's selected guild.
    pub fn is_selected(&self) -> bool {
        self.context()
            .current_guild()
            .is_some_and(|current| current == *self)
    }
}

/// A guild role. Rebuilt on every access.
#[derive(Debug, Clone)]
pub struct Role {
    context: Chorus,
    guild_id: GuildId,
    record: RoleRecord,
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.guild_id == other.guild_id && self.record == other.record
    }
}

impl Role {
    fn new(context: Chorus, guild_id: GuildId, record: RoleRecord) -> Self {
        Self {
            context,
            guild_id,
            record,
        }
    }

    /// Role id.
    pub fn id(&self) -> RoleId {
        self.record.id
    }

    /// Role name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Guild-level permissions the role grants.
    pub fn permissions(&self) -> Permissions {
        self.record.permissions
    }

    /// Hierarchy position.
    pub fn position(&self) -> i32 {
        self.record.position
    }

    /// Display color.
    pub fn color(&self) -> u32 {
        self.record.color
    }

    /// Shown separately in the member list.
    pub fn hoist(&self) -> bool {
        self.record.hoist
    }

    /// Whether this is the guild's `@everyone` role.
    pub fn is_everyone(&self) -> bool {
        self.record.id == RoleId::from(self.guild_id)
    }

    /// Owning guild id.
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Owning guild.
    pub fn guild(&self) -> Option<Guild> {
        self.context.guild_from_id(self.guild_id)
    }
}

/// A user's membership in a guild. Rebuilt on every access.
#[derive(Debug, Clone)]
pub struct GuildMember {
    context: Chorus,
    record: MemberRecord,
}

impl PartialEq for GuildMember {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}

impl GuildMember {
    fn new(context: Chorus, record: MemberRecord) -> Self {
        Self { context, record }
    }

    /// Member's user id.
    pub fn user_id(&self) -> UserId {
        self.record.user_id
    }

    /// Guild id.
    pub fn guild_id(&self) -> GuildId {
        self.record.guild_id
    }

    /// Guild-specific nickname.
    pub fn nick(&self) -> Option<&str> {
        self.record.nick.as_deref()
    }

    /// Ids of the roles held, excluding `@everyone`.
    pub fn role_ids(&self) -> &[RoleId] {
        &self.record.roles
    }

    /// Roles held, excluding `@everyone`, in the guild's role order.
    pub fn roles(&self) -> Vec<Role> {
        self.guild()
            .map(|guild| {
                guild
                    .roles()
                    .into_iter()
                    .filter(|role| self.record.roles.contains(&role.id()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The member's user account.
    pub fn user(&self) -> Option<User> {
        self.context.user_from_id(self.record.user_id)
    }

    /// The guild.
    pub fn guild(&self) -> Option<Guild> {
        self.context.guild_from_id(self.record.guild_id)
    }

    /// Nickname, else the user's display name, else the username.
    pub fn display_name(&self) -> Option<String> {
        self.record
            .nick
            .clone()
            .or_else(|| self.user().map(|user| user.display_name()))
    }

    /// Guild-level permissions before any channel overwrite.
    pub fn permissions(&self) -> Permissions {
        let backend = self.context.backend();
        let Some(guild) = backend.guild(self.record.guild_id) else {
            return Permissions::empty();
        };
        let guild = guild.snapshot();
        let roles = backend.roles(self.record.guild_id);
        PermissionResolver::new(&guild, &roles, &self.record).base()
    }
}
