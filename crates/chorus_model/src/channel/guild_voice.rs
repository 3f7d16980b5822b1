//! Guild voice channels (kind 2).

use super::base;
use super::{channel_handle, ChannelCore, ChannelInfo, ChannelOps, GuildChannel};
use crate::Message;
use async_trait::async_trait;
use chorus_error::ChorusResult;

channel_handle!(
    /// A voice channel in a guild.
    ///
    /// Voice channels carry no message history. Messaging, invites, jumping
    /// and selection fail as unsupported regardless of permissions.
    GuildVoiceChannel
);

impl GuildVoiceChannel {
    /// Maximum connected users, 0 meaning unlimited.
    pub fn user_limit(&self) -> Option<u32> {
        self.core.record().read(|r| r.user_limit)
    }

    /// Audio bitrate in bits per second.
    pub fn bitrate(&self) -> Option<u32> {
        self.core.record().read(|r| r.bitrate)
    }
}

impl ChannelInfo for GuildVoiceChannel {
    fn core(&self) -> &ChannelCore {
        &self.core
    }
}

impl GuildChannel for GuildVoiceChannel {}

#[async_trait]
impl ChannelOps for GuildVoiceChannel {
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
