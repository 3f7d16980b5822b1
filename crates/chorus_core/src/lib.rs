//! Core data types for the Chorus client entity model.
//!
//! This crate provides the raw records the live store owns, the typed ids that
//! link them, channel and overwrite discriminants, and the permission bitmask
//! with its resolution rules. Nothing here talks to a store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cell;
mod ids;
mod kind;
mod permissions;
mod records;
mod telemetry;

pub use cell::RecordCell;
pub use ids::{ChannelId, GuildId, MessageId, RoleId, UserId};
pub use kind::{ChannelKind, OverwriteKind};
pub use permissions::{Capability, PermissionResolver, Permissions};
pub use records::{
    ChannelRecord, ChannelRecordBuilder, GuildRecord, GuildRecordBuilder, MemberRecord,
    MemberRecordBuilder, MessageRecord, MessageRecordBuilder, OverwriteRecord,
    OverwriteRecordBuilder, RoleRecord, RoleRecordBuilder, UserRecord, UserRecordBuilder,
};
pub use telemetry::{TelemetryConfig, TelemetryConfigBuilder, init_telemetry};
