//! Entry points and identity caches.

use crate::channel::{self, Channel, ChannelCore};
use crate::guild::{Guild, GuildCore};
use crate::message::{Message, MessageCore};
use crate::user::{User, UserCore};
use crate::ModelConfig;
use chorus_cache::{CacheConfig, IdentityCache};
use chorus_core::{
    ChannelId, ChannelRecord, GuildId, GuildRecord, MessageId, MessageRecord, RecordCell, UserId,
    UserRecord,
};
use chorus_interface::Backend;
use std::fmt;
use std::sync::Arc;
use tracing::{instrument, warn};

struct Inner {
    backend: Arc<dyn Backend>,
    config: ModelConfig,
    channels: IdentityCache<ChannelId, ChannelCore>,
    guilds: IdentityCache<GuildId, GuildCore>,
    users: IdentityCache<UserId, UserCore>,
    messages: IdentityCache<(ChannelId, MessageId), MessageCore>,
}

/// The entity model's context: a backend plus one identity cache per entity family.
///
/// Cloning is cheap and every clone shares the same caches, so a wrapper
/// materialized through one clone is the wrapper every other clone returns.
///
/// A record's identity is its id together with the store's cell for it. While
/// any handle to a wrapper is alive, materializing the same cell returns that
/// wrapper. If the store replaces the cell under the same id, the next call
/// builds a fresh wrapper around the new cell.
#[derive(Clone)]
pub struct Chorus {
    inner: Arc<Inner>,
}

impl fmt::Debug for Chorus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chorus")
            .field("config", &self.inner.config)
            .field("live_channels", &self.inner.channels.live_count())
            .field("live_guilds", &self.inner.guilds.live_count())
            .field("live_users", &self.inner.users.live_count())
            .field("live_messages", &self.inner.messages.live_count())
            .finish_non_exhaustive()
    }
}

impl Chorus {
    /// Create a context with default configuration.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_config(backend, ModelConfig::default(), CacheConfig::default())
    }

    /// Create a context with explicit model and cache configuration.
    pub fn with_config(backend: Arc<dyn Backend>, config: ModelConfig, cache: CacheConfig) -> Self {
        tracing::info!(
            max_messages_per_channel = config.max_messages_per_channel(),
            sweep_threshold = cache.sweep_threshold(),
            "Creating entity model context"
        );
        Self {
            inner: Arc::new(Inner {
                backend,
                config,
                channels: IdentityCache::new("channels", cache.clone()),
                guilds: IdentityCache::new("guilds", cache.clone()),
                users: IdentityCache::new("users", cache.clone()),
                messages: IdentityCache::new("messages", cache),
            }),
        }
    }

    /// The live store and its side-effect surfaces.
    pub fn backend(&self) -> &dyn Backend {
        self.inner.backend.as_ref()
    }

    /// Model configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.inner.config
    }

    /// Materialize a channel record as its variant.
    ///
    /// The discriminant is read once, when the wrapper is first built. A cached
    /// wrapper whose record has since changed kind keeps its variant.
    #[instrument(skip_all, fields(channel_id))]
    pub fn channel(&self, record: RecordCell<ChannelRecord>) -> Channel {
        let id = record.read(|r| r.id);
        tracing::Span::current().record("channel_id", id.get());

        let core = self.inner.channels.materialize(
            id,
            |core| core.record().same_record(&record),
            || ChannelCore::new(self.clone(), record.clone()),
        );

        let live = record.read(|r| r.kind);
        if live != core.kind().discriminant() {
            warn!(
                built_as = %core.kind(),
                live_discriminant = live,
                "Channel kind changed after materialization, keeping original variant"
            );
        }

        channel::dispatch(core)
    }

    /// Look a channel up in the store and materialize it.
    pub fn channel_from_id(&self, id: ChannelId) -> Option<Channel> {
        self.backend().channel(id).map(|record| self.channel(record))
    }

    /// Materialize a guild record.
    #[instrument(skip_all, fields(guild_id))]
    pub fn guild(&self, record: RecordCell<GuildRecord>) -> Guild {
        let id = record.read(|r| r.id);
        tracing::Span::current().record("guild_id", id.get());

        let core = self.inner.guilds.materialize(
            id,
            |core| core.record().same_record(&record),
            || GuildCore::new(self.clone(), record.clone()),
        );
        Guild::new(core)
    }

    /// Look a guild up in the store and materialize it.
    pub fn guild_from_id(&self, id: GuildId) -> Option<Guild> {
        self.backend().guild(id).map(|record| self.guild(record))
    }

    /// Materialize a user record.
    #[instrument(skip_all, fields(user_id))]
    pub fn user(&self, record: RecordCell<UserRecord>) -> User {
        let id = record.read(|r| r.id);
        tracing::Span::current().record("user_id", id.get());

        let core = self.inner.users.materialize(
            id,
            |core| core.record().same_record(&record),
            || UserCore::new(self.clone(), record.clone()),
        );
        User::new(core)
    }

    /// Look a user up in the store and materialize it.
    pub fn user_from_id(&self, id: UserId) -> Option<User> {
        self.backend().user(id).map(|record| self.user(record))
    }

    /// Materialize a message record.
    #[instrument(skip_all, fields(channel_id, message_id))]
    pub fn message(&self, record: RecordCell<MessageRecord>) -> Message {
        let key = record.read(|r| (r.channel_id, r.id));
        let span = tracing::Span::current();
        span.record("channel_id", key.0.get());
        span.record("message_id", key.1.get());

        let core = self.inner.messages.materialize(
            key,
            |core| core.record().same_record(&record),
            || MessageCore::new(self.clone(), record.clone()),
        );
        Message::new(core)
    }

    /// Look a loaded message up in the store and materialize it.
    pub fn message_from_id(&self, channel_id: ChannelId, message_id: MessageId) -> Option<Message> {
        self.backend()
            .message(channel_id, message_id)
            .map(|record| self.message(record))
    }

    /// The acting user.
    pub fn current_user(&self) -> Option<User> {
        self.backend()
            .current_user_id()
            .and_then(|id| self.user_from_id(id))
    }

    /// The channel the application has selected.
    pub fn current_channel(&self) -> Option<Channel> {
        self.backend()
            .current_channel_id()
            .and_then(|id| self.channel_from_id(id))
    }

    /// The guild the application has selected.
    pub fn current_guild(&self) -> Option<Guild> {
        self.backend()
            .current_guild_id()
            .and_then(|id| self.guild_from_id(id))
    }

    /// Drop dead entries from every identity cache. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.inner.channels.sweep()
            + self.inner.guilds.sweep()
            + self.inner.users.sweep()
            + self.inner.messages.sweep()
    }

    /// Number of channel wrappers currently alive.
    pub fn live_channels(&self) -> usize {
        self.inner.channels.live_count()
    }

    /// Number of channel entries held, including dead ones not yet swept.
    pub fn cached_channels(&self) -> usize {
        self.inner.channels.len()
    }
}
