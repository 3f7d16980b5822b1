//! Channel entities.
//!
//! A [`Channel`] is one of a closed set of variants chosen by the record's
//! discriminant. Each variant is a handle around a shared [`ChannelCore`];
//! equality between handles is identity of that core.

mod base;
mod category;
mod dispatch;
mod generic;
mod guild_text;
mod guild_voice;
mod private;
mod state;
mod traits;

pub use category::ChannelCategory;
pub use generic::BaseChannel;
pub use guild_text::GuildTextChannel;
pub use guild_voice::GuildVoiceChannel;
pub use private::{DirectMessageChannel, GroupChannel};
pub use state::ChannelCore;
pub use traits::{ChannelInfo, ChannelOps, GuildChannel};

pub(crate) use dispatch::dispatch;

use crate::Message;
use async_trait::async_trait;
use chorus_core::ChannelId;
use chorus_error::ChorusResult;

/// Declares a variant handle: a cloneable wrapper compared by core identity.
macro_rules! channel_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            core: std::sync::Arc<$crate::channel::ChannelCore>,
        }

        impl $name {
            pub(crate) fn from_core(core: std::sync::Arc<$crate::channel::ChannelCore>) -> Self {
                Self { core }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.core, &other.core)
            }
        }

        impl Eq for $name {}
    };
}

pub(crate) use channel_handle;

/// A materialized channel of any kind.
///
/// Variant-specific accessors are reached by matching, or through the
/// `as_*` helpers. Every variant implements [`ChannelInfo`] and [`ChannelOps`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Channel {
    /// Kind 0
    GuildText(GuildTextChannel),
    /// Kind 1
    DirectMessage(DirectMessageChannel),
    /// Kind 2
    GuildVoice(GuildVoiceChannel),
    /// Kind 3
    Group(GroupChannel),
    /// Kind 4
    Category(ChannelCategory),
    /// Any other kind
    Base(BaseChannel),
}

macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Channel::GuildText($inner) => $body,
            Channel::DirectMessage($inner) => $body,
            Channel::GuildVoice($inner) => $body,
            Channel::Group($inner) => $body,
            Channel::Category($inner) => $body,
            Channel::Base($inner) => $body,
        }
    };
}

impl Channel {
    /// The variant as a guild channel, if it is one.
    pub fn as_guild_channel(&self) -> Option<&dyn GuildChannel> {
        match self {
            Self::GuildText(c) => Some(c as &dyn GuildChannel),
            Self::GuildVoice(c) => Some(c as &dyn GuildChannel),
            Self::Category(c) => Some(c as &dyn GuildChannel),
            Self::DirectMessage(_) | Self::Group(_) | Self::Base(_) => None,
        }
    }

    /// The guild text variant.
    pub fn as_guild_text(&self) -> Option<&GuildTextChannel> {
        match self {
            Self::GuildText(c) => Some(c),
            _ => None,
        }
    }

    /// The guild voice variant.
    pub fn as_guild_voice(&self) -> Option<&GuildVoiceChannel> {
        match self {
            Self::GuildVoice(c) => Some(c),
            _ => None,
        }
    }

    /// The category variant.
    pub fn as_category(&self) -> Option<&ChannelCategory> {
        match self {
            Self::Category(c) => Some(c),
            _ => None,
        }
    }

    /// The direct message variant.
    pub fn as_direct_message(&self) -> Option<&DirectMessageChannel> {
        match self {
            Self::DirectMessage(c) => Some(c),
            _ => None,
        }
    }

    /// The group variant.
    pub fn as_group(&self) -> Option<&GroupChannel> {
        match self {
            Self::Group(c) => Some(c),
            _ => None,
        }
    }

    /// The generic variant.
    pub fn as_base(&self) -> Option<&BaseChannel> {
        match self {
            Self::Base(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this channel is a private conversation.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::DirectMessage(_) | Self::Group(_))
    }
}

impl ChannelInfo for Channel {
    fn core(&self) -> &ChannelCore {
        each_variant!(self, c => c.core())
    }

    fn parent_id(&self) -> Option<ChannelId> {
        each_variant!(self, c => c.parent_id())
    }
}

#[async_trait]
impl ChannelOps for Channel {
    async fn send_message(&self, content: &str, parse: bool) -> ChorusResult<Message> {
        each_variant!(self, c => c.send_message(content, parse).await)
    }

    fn send_bot_message(&self, content: &str) -> ChorusResult<Message> {
        each_variant!(self, c => c.send_bot_message(content))
    }

    fn messages(&self) -> Vec<Message> {
        each_variant!(self, c => c.messages())
    }

    fn has_more_after(&self) -> bool {
        each_variant!(self, c => c.has_more_after())
    }

    fn jump_to_present(&self) -> ChorusResult<()> {
        each_variant!(self, c => c.jump_to_present())
    }

    async fn send_invite(&self, code: &str) -> ChorusResult<Message> {
        each_variant!(self, c => c.send_invite(code).await)
    }

    fn select(&self) -> ChorusResult<()> {
        each_variant!(self, c => c.select())
    }
}
