//! Channel contracts.

use super::{base, Channel, ChannelCore};
use crate::{Guild, Message, PermissionOverwrite};
use async_trait::async_trait;
use chorus_core::{ChannelId, ChannelKind, GuildId, Permissions, UserId};
use chorus_error::ChorusResult;
use chorus_interface::SettingsSection;
use std::collections::HashMap;

/// Read accessors shared by every channel variant.
///
/// All accessors read the live record on each call.
pub trait ChannelInfo {
    /// Shared state behind this wrapper.
    fn core(&self) -> &ChannelCore;

    /// Channel id.
    fn id(&self) -> ChannelId {
        self.core().id()
    }

    /// Application that created the channel.
    fn application_id(&self) -> Option<u64> {
        self.core().record().read(|r| r.application_id)
    }

    /// Display name.
    fn name(&self) -> Option<String> {
        self.core().record().read(|r| r.name.clone())
    }

    /// Variant kind, fixed when the wrapper was built.
    fn kind(&self) -> ChannelKind {
        self.core().kind()
    }

    /// Owning guild id.
    fn guild_id(&self) -> Option<GuildId> {
        self.core().record().read(|r| r.guild_id)
    }

    /// Parent category id.
    fn parent_id(&self) -> Option<ChannelId> {
        self.core().record().read(|r| r.parent_id)
    }

    /// Sort position within the guild.
    fn position(&self) -> Option<i32> {
        self.core().record().read(|r| r.position)
    }

    /// Whether this is the application's selected channel.
    fn is_selected(&self) -> bool {
        self.core()
            .context()
            .current_channel()
            .is_some_and(|current| std::ptr::eq(current.core(), self.core()))
    }

    /// Open the channel settings window at the overview.
    fn open_settings(&self) {
        self.open_settings_at(SettingsSection::default());
    }

    /// Open the channel settings window at a section.
    fn open_settings_at(&self, section: SettingsSection) {
        tracing::debug!(channel_id = %self.id(), %section, "Opening channel settings");
        self.core()
            .context()
            .backend()
            .open_channel_settings(self.id(), section);
    }
}

/// Operations every variant must explicitly implement or reject.
///
/// Rejections fail with an unsupported-operation error before any permission
/// check. Guild variants check capabilities before touching the store.
#[async_trait]
pub trait ChannelOps: ChannelInfo + Send + Sync {
    /// Post a message. With `parse`, the store's formatter resolves markup first.
    async fn send_message(&self, content: &str, parse: bool) -> ChorusResult<Message>;

    /// Post a system message only the acting user can see. Never gated.
    fn send_bot_message(&self, content: &str) -> ChorusResult<Message>;

    /// Messages currently loaded for this channel.
    fn messages(&self) -> Vec<Message>;

    /// Whether newer messages exist beyond the loaded window.
    fn has_more_after(&self) -> bool;

    /// Scroll to the newest message, loading it first if needed.
    fn jump_to_present(&self) -> ChorusResult<()>;

    /// Post an invite.
    async fn send_invite(&self, code: &str) -> ChorusResult<Message>;

    /// Navigate the application to this channel.
    fn select(&self) -> ChorusResult<()>;
}

/// Accessors for channels that live in a guild.
pub trait GuildChannel: ChannelInfo {
    /// The owning guild.
    fn guild(&self) -> Option<Guild> {
        self.guild_id()
            .and_then(|id| self.core().context().guild_from_id(id))
    }

    /// The parent category.
    fn category(&self) -> Option<Channel> {
        self.parent_id()
            .and_then(|id| self.core().context().channel_from_id(id))
    }

    /// The acting user's effective permissions here.
    fn permissions(&self) -> Permissions {
        base::effective_permissions(self.core())
    }

    /// Access-control entries, rebuilt from the live record.
    fn permission_overwrites(&self) -> Vec<PermissionOverwrite> {
        let core = self.core();
        let id = core.id();
        core.record()
            .read(|r| r.permission_overwrites.clone())
            .into_iter()
            .map(|entry| PermissionOverwrite::from_record(core.context().clone(), id, entry))
            .collect()
    }

    /// Per-channel nicknames keyed by user.
    fn nicks(&self) -> HashMap<UserId, String> {
        self.core().record().read(|r| r.nicks.clone())
    }

    /// Whether the guild lands new members here.
    fn is_default_channel(&self) -> bool {
        self.guild_id().is_some_and(|guild_id| {
            self.core().context().backend().default_channel(guild_id) == Some(self.id())
        })
    }

    /// Whether the acting user holds every bit in `required`.
    fn check_capability(&self, required: Permissions) -> bool {
        base::check_capability(self.core(), required)
    }

    /// Fail with a capability error named `name` unless `required` is held.
    fn assert_capability(&self, name: &str, required: Permissions) -> ChorusResult<()> {
        base::assert_capability(self.core(), name, required)
    }
}
