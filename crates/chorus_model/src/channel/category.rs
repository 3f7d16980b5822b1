//! Channel categories (kind 4).

use super::base;
use super::{channel_handle, Channel, ChannelCore, ChannelInfo, ChannelOps, GuildChannel};
use crate::Message;
use async_trait::async_trait;
use chorus_core::ChannelId;
use chorus_error::ChorusResult;

channel_handle!(
    /// A grouping of guild channels.
    ///
    /// Categories never nest and cannot be messaged or selected.
    ChannelCategory
);

impl ChannelCategory {
    /// Guild channels whose parent is this category, in the guild's order.
    ///
    /// Recomputed from the store on every call.
    pub fn channels(&self) -> Vec<Channel> {
        let Some(guild_id) = self.guild_id() else {
            return Vec::new();
        };
        let id = self.id();
        let context = self.core.context();
        context
            .backend()
            .guild_channels(guild_id)
            .into_iter()
            .filter(|record| record.read(|r| r.parent_id == Some(id)))
            .map(|record| context.channel(record))
            .collect()
    }
}

impl ChannelInfo for ChannelCategory {
    fn core(&self) -> &ChannelCore {
        &self.core
    }

    fn parent_id(&self) -> Option<ChannelId> {
        None
    }
}

impl GuildChannel for ChannelCategory {
    fn category(&self) -> Option<Channel> {
        None
    }
}

#[async_trait]
impl ChannelOps for ChannelCategory {
    async fn send_message(&self, _content: &str, _parse: bool) -> ChorusResult<Message> {
        Err(base::unsupported(&self.core, "send_message"))
    }

    fn send_bot_message(&self, content: &str) -> ChorusResult<Message> {
        base::send_bot_message(&self.core, content)
    }

    fn messages(&self) -> Vec<Message> {
        Vec::new()
    }

    fn has_more_after(&self) -> bool {
        false
    }

    fn jump_to_present(&self) -> ChorusResult<()> {
        Err(base::unsupported(&self.core, "jump_to_present"))
    }

    async fn send_invite(&self, _code: &str) -> ChorusResult<Message> {
        Err(base::unsupported(&self.core, "send_invite"))
    }

    fn select(&self) -> ChorusResult<()> {
        Err(base::unsupported(&self.core, "select"))
    }
}
