//! Chorus - client-side entity model for a Discord-like chat store
//!
//! Chorus turns raw store records into typed, behavior-rich entities. Each
//! record materializes as exactly one live wrapper, built as the variant its
//! discriminant selects, and every mutating channel operation is checked
//! against the acting user's permissions before the store is touched.
//!
//! # Crates
//!
//! - `chorus_error` - error types with source location tracking
//! - `chorus_core` - records, ids, discriminants and permission resolution
//! - `chorus_interface` - the store and side-effect traits a host implements
//! - `chorus_cache` - the weak identity cache
//! - `chorus_model` - channels, overwrites and supporting entities
//!
//! This crate re-exports all of them and adds layered configuration.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chorus::{ChannelOps, ChorusConfig};
//!
//! let config = ChorusConfig::load()?;
//! config.init_telemetry()?;
//! let chorus = config.context(backend);
//!
//! if let Some(general) = chorus.channel_from_id(channel_id) {
//!     general.send_message("hello", true).await?;
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{ChorusConfig, ChorusConfigBuilder};

pub use chorus_cache::{CacheConfig, CacheConfigBuilder, CacheStats, IdentityCache};
pub use chorus_core::{
    Capability, ChannelId, ChannelKind, ChannelRecord, ChannelRecordBuilder, GuildId, GuildRecord,
    GuildRecordBuilder, MemberRecord, MemberRecordBuilder, MessageId, MessageRecord,
    MessageRecordBuilder, OverwriteKind, OverwriteRecord, OverwriteRecordBuilder,
    PermissionResolver, Permissions, RecordCell, RoleId, RoleRecord, RoleRecordBuilder,
    TelemetryConfig, TelemetryConfigBuilder, UserId, UserRecord, UserRecordBuilder,
    init_telemetry,
};
pub use chorus_error::{
    CapabilityError, ChorusError, ChorusErrorKind, ChorusResult, ConfigError, StoreError,
    StoreErrorKind, StoreResult, UnsupportedError,
};
pub use chorus_interface::{
    Backend, ChannelStore, GuildStore, MessageFormatter, MessagePayload, MessagePayloadBuilder,
    MessageStore, MessageTransport, NavigationTarget, Navigator, SettingsSection, SettingsSurface,
    UserStore,
};
pub use chorus_model::{
    BaseChannel, BasePermissionOverwrite, Channel, ChannelCategory, ChannelCore, ChannelInfo,
    ChannelOps, Chorus, DirectMessageChannel, GroupChannel, Guild, GuildChannel, GuildMember,
    GuildTextChannel, GuildVoiceChannel, MemberPermissionOverwrite, Message, ModelConfig,
    ModelConfigBuilder, OverwriteEntry, OverwriteInfo, PermissionOverwrite,
    RolePermissionOverwrite, Role, User,
};
