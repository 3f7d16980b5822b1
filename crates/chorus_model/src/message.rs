//! Messages.

use crate::{Channel, Chorus, User};
use chorus_core::{ChannelId, MessageId, MessageRecord, RecordCell, UserId};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct MessageCore {
    context: Chorus,
    record: RecordCell<MessageRecord>,
}

impl MessageCore {
    pub(crate) fn new(context: Chorus, record: RecordCell<MessageRecord>) -> Self {
        Self { context, record }
    }

    pub(crate) fn record(&self) -> &RecordCell<MessageRecord> {
        &self.record
    }
}

/// A loaded message. Identity-cached per channel and message id.
#[derive(Debug, Clone)]
pub struct Message {
    core: Arc<MessageCore>,
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for Message {}

impl Message {
    pub(crate) fn new(core: Arc<MessageCore>) -> Self {
        Self { core }
    }

    /// Message id.
    pub fn id(&self) -> MessageId {
        self.core.record.read(|r| r.id)
    }

    /// Id of the channel the message lives in.
    pub fn channel_id(&self) -> ChannelId {
        self.core.record.read(|r| r.channel_id)
    }

    /// Text content.
    pub fn content(&self) -> String {
        self.core.record.read(|r| r.content.clone())
    }

    /// Author id.
    pub fn author_id(&self) -> UserId {
        self.core.record.read(|r| r.author_id)
    }

    /// Author.
    pub fn author(&self) -> Option<User> {
        self.core.context.user_from_id(self.author_id())
    }

    /// Creation time.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.core.record.read(|r| r.timestamp)
    }

    /// Last edit time.
    pub fn edited_timestamp(&self) -> Option<DateTime<Utc>> {
        self.core.record.read(|r| r.edited_timestamp)
    }

    /// Whether only the acting user can see this message.
    pub fn is_local_only(&self) -> bool {
        self.core.record.read(|r| r.local_only)
    }

    /// The channel the message lives in.
    pub fn channel(&self) -> Option<Channel> {
        self.core.context.channel_from_id(self.channel_id())
    }

    /// Scroll the channel to this message, optionally highlighting it.
    pub fn jump_to(&self, flash: bool) {
        let (channel_id, message_id) = self.core.record.read(|r| (r.channel_id, r.id));
        tracing::debug!(%channel_id, %message_id, flash, "Jumping to message");
        self.core
            .context
            .backend()
            .jump_to_message(channel_id, message_id, flash);
    }
}
