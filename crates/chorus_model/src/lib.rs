//! Typed, behavior-rich entities over a live chat store.
//!
//! Application code never constructs entities directly. It hands a raw record
//! (or an id) to a [`Chorus`] context, which returns the single live wrapper
//! for that record, built as the variant the record's discriminant selects.
//!
//! # Entities
//!
//! - [`Channel`] - closed set of channel variants, see [`ChannelInfo`] and [`ChannelOps`]
//! - [`PermissionOverwrite`] - per-channel access-control entries, rebuilt on every access
//! - [`Guild`], [`User`], [`Message`] - identity-cached supporting entities
//! - [`Role`], [`GuildMember`] - transient values
//!
//! # Freshness
//!
//! Wrappers hold a shared handle to the store's record and nothing else.
//! Every accessor reads the live record or queries the store on each call.
//!
//! # Failures
//!
//! Mutating operations on guild channels are gated by the acting user's
//! effective permissions and fail with a capability error before touching the
//! store. Operations a variant can never perform (messaging a voice channel)
//! fail with a distinct unsupported-operation error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod config;
mod context;
mod guild;
mod message;
mod overwrite;
mod user;

pub use channel::{
    BaseChannel, Channel, ChannelCategory, ChannelCore, ChannelInfo, ChannelOps,
    DirectMessageChannel, GroupChannel, GuildChannel, GuildTextChannel, GuildVoiceChannel,
};
pub use config::{ModelConfig, ModelConfigBuilder};
pub use context::Chorus;
pub use guild::{Guild, GuildMember, Role};
pub use message::Message;
pub use overwrite::{
    BasePermissionOverwrite, MemberPermissionOverwrite, OverwriteEntry, OverwriteInfo,
    PermissionOverwrite, RolePermissionOverwrite,
};
pub use user::User;
