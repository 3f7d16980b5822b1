//! Guild text channels (kind 0).

use super::base::{self, Gate};
use super::{channel_handle, ChannelCore, ChannelInfo, ChannelOps, GuildChannel};
use crate::Message;
use async_trait::async_trait;
use chorus_error::ChorusResult;

channel_handle!(
    /// A text channel in a guild. Every operation is gated.
    GuildTextChannel
);

impl GuildTextChannel {
    /// Channel topic.
    pub fn topic(&self) -> Option<String> {
        self.core.record().read(|r| r.topic.clone())
    }

    /// Age-restricted flag.
    pub fn nsfw(&self) -> bool {
        self.core.record().read(|r| r.nsfw)
    }
}

impl ChannelInfo for GuildTextChannel {
    fn core(&self) -> &ChannelCore {
        &self.core
    }
}

impl GuildChannel for GuildTextChannel {}

#[async_trait]
impl ChannelOps for GuildTextChannel {
    async fn send_message(&self, content: &str, parse: bool) -> ChorusResult<Message> {
        base::send_message(&self.core, Gate::Guild, content, parse).await
    }

    fn send_bot_message(&self, content: &str) -> ChorusResult<Message> {
        base::send_bot_message(&self.core, content)
    }

    fn messages(&self) -> Vec<Message> {
        base::messages(&self.core)
    }

    fn has_more_after(&self) -> bool {
        base::has_more_after(&self.core)
    }

    fn jump_to_present(&self) -> ChorusResult<()> {
        base::jump_to_present(&self.core, Gate::Guild)
    }

    async fn send_invite(&self, code: &str) -> ChorusResult<Message> {
        base::send_invite(&self.core, Gate::Guild, code).await
    }

    fn select(&self) -> ChorusResult<()> {
        base::select(&self.core, Gate::Guild)
    }
}
