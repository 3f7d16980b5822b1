//! Trait definitions for the live store and its side-effect surfaces.

use crate::{MessagePayload, NavigationTarget, SettingsSection};
use async_trait::async_trait;
use chorus_core::{
    ChannelId, ChannelRecord, GuildId, GuildRecord, MemberRecord, MessageId, MessageRecord,
    RecordCell, RoleRecord, UserId, UserRecord,
};
use chorus_error::StoreResult;

/// Channel lookups.
pub trait ChannelStore: Send + Sync {
    /// The live record for a channel, if the store holds it.
    fn channel(&self, id: ChannelId) -> Option<RecordCell<ChannelRecord>>;

    /// All channels of a guild, in the guild's display order.
    fn guild_channels(&self, guild_id: GuildId) -> Vec<RecordCell<ChannelRecord>>;

    /// The channel new members land in.
    fn default_channel(&self, guild_id: GuildId) -> Option<ChannelId>;
}

/// Guild, role and membership lookups.
pub trait GuildStore: Send + Sync {
    /// The live record for a guild.
    fn guild(&self, id: GuildId) -> Option<RecordCell<GuildRecord>>;

    /// Roles of a guild, including `@everyone`.
    fn roles(&self, guild_id: GuildId) -> Vec<RoleRecord>;

    /// A user's membership in a guild.
    fn member(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRecord>;
}

/// User lookups.
pub trait UserStore: Send + Sync {
    /// The live record for a user.
    fn user(&self, id: UserId) -> Option<RecordCell<UserRecord>>;

    /// The acting (logged-in) user.
    fn current_user_id(&self) -> Option<UserId>;
}

/// Loaded messages and pagination state.
pub trait MessageStore: Send + Sync {
    /// Messages currently loaded for a channel, in the store's order.
    fn messages(&self, channel_id: ChannelId) -> Vec<RecordCell<MessageRecord>>;

    /// A single loaded message.
    fn message(&self, channel_id: ChannelId, message_id: MessageId) -> Option<RecordCell<MessageRecord>>;

    /// Whether newer messages exist beyond the loaded window.
    fn has_more_after(&self, channel_id: ChannelId) -> bool;
}

/// Message side effects.
///
/// The two async methods are remote round trips. Implementations own retries
/// and timeouts; the model propagates their errors unchanged.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Post a message and return the id the service assigned.
    async fn send_message(&self, channel_id: ChannelId, payload: MessagePayload) -> StoreResult<MessageId>;

    /// Post an invite and return the id of the resulting message.
    async fn send_invite(&self, channel_id: ChannelId, code: &str) -> StoreResult<MessageId>;

    /// Feed a locally created message into the store's receive pipeline.
    fn receive_message(&self, channel_id: ChannelId, message: MessageRecord);

    /// Load up to `limit` of the newest messages and scroll to them.
    fn jump_to_present(&self, channel_id: ChannelId, limit: usize);

    /// Scroll to a loaded message, optionally highlighting it.
    fn jump_to_message(&self, channel_id: ChannelId, message_id: MessageId, flash: bool);
}

/// Message text processing.
pub trait MessageFormatter: Send + Sync {
    /// Resolve mentions, emoji and markup in user-typed text.
    fn parse(&self, channel: &ChannelRecord, content: &str) -> MessagePayload;

    /// Build a system message only the acting user will see.
    fn create_bot_message(&self, channel_id: ChannelId, content: &str) -> MessageRecord;
}

/// Application navigation state.
pub trait Navigator: Send + Sync {
    /// Move the application to a guild (or home) and optionally a channel.
    fn transition_to(&self, target: NavigationTarget, channel_id: Option<ChannelId>);

    /// The selected channel.
    fn current_channel_id(&self) -> Option<ChannelId>;

    /// The selected guild.
    fn current_guild_id(&self) -> Option<GuildId>;
}

/// Channel settings window.
pub trait SettingsSurface: Send + Sync {
    /// Open settings for a channel at a section.
    fn open_channel_settings(&self, channel_id: ChannelId, section: SettingsSection);
}

/// Everything the entity model needs from its host.
///
/// Implemented automatically for any type implementing all collaborator traits.
pub trait Backend:
    ChannelStore
    + GuildStore
    + UserStore
    + MessageStore
    + MessageTransport
    + MessageFormatter
    + Navigator
    + SettingsSurface
{
}

impl<T> Backend for T where
    T: ChannelStore
        + GuildStore
        + UserStore
        + MessageStore
        + MessageTransport
        + MessageFormatter
        + Navigator
        + SettingsSurface
        + ?Sized
{
}
