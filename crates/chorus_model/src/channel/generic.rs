//! Fallback for channel kinds without a specialization.

use super::base::{self, Gate};
use super::{channel_handle, ChannelCore, ChannelInfo, ChannelOps};
use crate::{Guild, Message};
use async_trait::async_trait;
use chorus_error::ChorusResult;

channel_handle!(
    /// A channel whose kind the model does not specialize.
    ///
    /// Behaves like a text channel. Operations are gated when the record
    /// carries a guild id, and open otherwise.
    BaseChannel
);

impl BaseChannel {
    /// The owning guild, if the record names one the store holds.
    pub fn guild(&self) -> Option<Guild> {
        self.guild_id()
            .and_then(|id| self.core.context().guild_from_id(id))
    }

    /// Whether operations on this channel check capabilities.
    pub fn is_gated(&self) -> bool {
        Gate::from_record(&self.core) == Gate::Guild
    }
}

impl ChannelInfo for BaseChannel {
    fn core(&self) -> &ChannelCore {
        &self.core
    }
}

#[async_trait]
impl ChannelOps for BaseChannel {
    async fn send_message(&self, content: &str, parse: bool) -> ChorusResult<Message> {
        base::send_message(&self.core, Gate::from_record(&self.core), content, parse).await
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
        base::jump_to_present(&self.core, Gate::from_record(&self.core))
    }

    async fn send_invite(&self, code: &str) -> ChorusResult<Message> {
        base::send_invite(&self.core, Gate::from_record(&self.core), code).await
    }

    fn select(&self) -> ChorusResult<()> {
        base::select(&self.core, Gate::from_record(&self.core))
    }
}
