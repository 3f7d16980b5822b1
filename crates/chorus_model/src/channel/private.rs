//! Private conversations: direct messages (kind 1) and groups (kind 3).
//!
//! Private channels have no guild and are never capability-gated.

use super::base::{self, Gate};
use super::{channel_handle, ChannelCore, ChannelInfo, ChannelOps};
use crate::{Message, User};
use async_trait::async_trait;
use chorus_core::UserId;
use chorus_error::ChorusResult;

channel_handle!(
    /// A one-to-one conversation.
    DirectMessageChannel
);

impl DirectMessageChannel {
    /// The other participant's id.
    pub fn recipient_id(&self) -> Option<UserId> {
        self.core.record().read(|r| r.recipients.first().copied())
    }

    /// The other participant.
    pub fn recipient(&self) -> Option<User> {
        self.recipient_id()
            .and_then(|id| self.core.context().user_from_id(id))
    }
}

channel_handle!(
    /// A conversation between several users.
    GroupChannel
);

impl GroupChannel {
    /// Creator of the group.
    pub fn owner_id(&self) -> Option<UserId> {
        self.core.record().read(|r| r.owner_id)
    }

    /// The group's owner, usually whoever created it.
    pub fn owner(&self) -> Option<User> {
        self.owner_id()
            .and_then(|id| self.core.context().user_from_id(id))
    }

    /// Icon hash.
    pub fn icon(&self) -> Option<String> {
        self.core.record().read(|r| r.icon.clone())
    }

    /// The other participants. Users the store does not know are skipped.
    pub fn members(&self) -> Vec<User> {
        let context = self.core.context();
        self.core
            .record()
            .read(|r| r.recipients.clone())
            .into_iter()
            .filter_map(|id| context.user_from_id(id))
            .collect()
    }
}

macro_rules! open_channel_ops {
    ($name:ident) => {
        impl ChannelInfo for $name {
            fn core(&self) -> &ChannelCore {
                &self.core
            }
        }

        #[async_trait]
        impl ChannelOps for $name {
            async fn send_message(&self, content: &str, parse: bool) -> ChorusResult<Message> {
                base::send_message(&self.core, Gate::Open, content, parse).await
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
                base::jump_to_present(&self.core, Gate::Open)
            }

            async fn send_invite(&self, code: &str) -> ChorusResult<Message> {
                base::send_invite(&self.core, Gate::Open, code).await
            }

            fn select(&self) -> ChorusResult<()> {
                base::select(&self.core, Gate::Open)
            }
        }
    };
}

open_channel_ops!(DirectMessageChannel);
open_channel_ops!(GroupChannel);
