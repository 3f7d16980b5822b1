//! In-memory store implementing every collaborator trait.

use async_trait::async_trait;
use chorus_core::{
    ChannelId, ChannelRecord, GuildId, GuildRecord, MemberRecord, MessageId, MessageRecord,
    MessageRecordBuilder, RecordCell, RoleRecord, UserId, UserRecord,
};
use chorus_error::{StoreError, StoreErrorKind, StoreResult};
use chorus_interface::{
    ChannelStore, GuildStore, MessageFormatter, MessagePayload, MessagePayloadBuilder,
    MessageStore, MessageTransport, NavigationTarget, Navigator, SettingsSection, SettingsSurface,
    UserStore,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Author id stamped on locally synthesized bot messages.
pub const SYSTEM_USER: UserId = UserId(1);

/// A side effect the model asked the store to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SendMessage {
        channel_id: ChannelId,
        payload: MessagePayload,
    },
    SendInvite {
        channel_id: ChannelId,
        code: String,
    },
    ReceiveMessage {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    JumpToPresent {
        channel_id: ChannelId,
        limit: usize,
    },
    JumpToMessage {
        channel_id: ChannelId,
        message_id: MessageId,
        flash: bool,
    },
    Transition {
        target: NavigationTarget,
        channel_id: Option<ChannelId>,
    },
    OpenSettings {
        channel_id: ChannelId,
        section: SettingsSection,
    },
}

#[derive(Default)]
struct State {
    channels: Vec<RecordCell<ChannelRecord>>,
    guilds: HashMap<GuildId, RecordCell<GuildRecord>>,
    roles: HashMap<GuildId, Vec<RoleRecord>>,
    members: HashMap<(GuildId, UserId), MemberRecord>,
    users: HashMap<UserId, RecordCell<UserRecord>>,
    messages: HashMap<ChannelId, Vec<RecordCell<MessageRecord>>>,
    has_more_after: HashMap<ChannelId, bool>,
    default_channels: HashMap<GuildId, ChannelId>,
    current_user: Option<UserId>,
    current_channel: Option<ChannelId>,
    current_guild: Option<GuildId>,
    next_message_id: u64,
    send_failure: Option<StoreErrorKind>,
    skip_ingest: bool,
    mutations: Vec<Mutation>,
}

/// Store double that keeps records in memory and records every mutation.
///
/// Sent messages are ingested immediately unless [`MemoryBackend::skip_ingest`]
/// is set, and sends fail when [`MemoryBackend::fail_sends`] is set.
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_message_id: 9000,
                ..State::default()
            }),
        }
    }

    /// Insert a channel at the end of the store's order.
    pub fn insert_channel(&self, record: ChannelRecord) -> RecordCell<ChannelRecord> {
        let cell = RecordCell::new(record);
        self.state.lock().channels.push(cell.clone());
        cell
    }

    /// Replace the cell for a channel id, keeping its position.
    pub fn replace_channel(&self, record: ChannelRecord) -> RecordCell<ChannelRecord> {
        let id = record.id;
        let cell = RecordCell::new(record);
        let mut state = self.state.lock();
        match state.channels.iter().position(|c| c.read(|r| r.id) == id) {
            Some(index) => state.channels[index] = cell.clone(),
            None => state.channels.push(cell.clone()),
        }
        cell
    }

    pub fn remove_channel(&self, id: ChannelId) {
        self.state.lock().channels.retain(|c| c.read(|r| r.id) != id);
    }

    pub fn insert_guild(&self, record: GuildRecord) -> RecordCell<GuildRecord> {
        let cell = RecordCell::new(record);
        let id = cell.read(|r| r.id);
        self.state.lock().guilds.insert(id, cell.clone());
        cell
    }

    pub fn remove_guild(&self, id: GuildId) {
        self.state.lock().guilds.remove(&id);
    }

    pub fn insert_role(&self, guild_id: GuildId, role: RoleRecord) {
        self.state.lock().roles.entry(guild_id).or_default().push(role);
    }

    pub fn replace_roles(&self, guild_id: GuildId, roles: Vec<RoleRecord>) {
        self.state.lock().roles.insert(guild_id, roles);
    }

    pub fn insert_member(&self, member: MemberRecord) {
        self.state
            .lock()
            .members
            .insert((member.guild_id, member.user_id), member);
    }

    pub fn insert_user(&self, record: UserRecord) -> RecordCell<UserRecord> {
        let cell = RecordCell::new(record);
        let id = cell.read(|r| r.id);
        self.state.lock().users.insert(id, cell.clone());
        cell
    }

    pub fn insert_message(&self, record: MessageRecord) -> RecordCell<MessageRecord> {
        let cell = RecordCell::new(record);
        let channel_id = cell.read(|r| r.channel_id);
        self.state
            .lock()
            .messages
            .entry(channel_id)
            .or_default()
            .push(cell.clone());
        cell
    }

    pub fn set_has_more_after(&self, channel_id: ChannelId, more: bool) {
        self.state.lock().has_more_after.insert(channel_id, more);
    }

    pub fn set_default_channel(&self, guild_id: GuildId, channel_id: ChannelId) {
        self.state.lock().default_channels.insert(guild_id, channel_id);
    }

    pub fn set_current_user(&self, user_id: Option<UserId>) {
        self.state.lock().current_user = user_id;
    }

    /// Make every subsequent send fail with `kind`.
    pub fn fail_sends(&self, kind: StoreErrorKind) {
        self.state.lock().send_failure = Some(kind);
    }

    /// Accept sends without adding the created message to the store.
    pub fn skip_ingest(&self) {
        self.state.lock().skip_ingest = true;
    }

    /// Everything the model asked the store to do, in order.
    pub fn mutations(&self) -> Vec<Mutation> {
        self.state.lock().mutations.clone()
    }

    fn record(&self, mutation: Mutation) {
        self.state.lock().mutations.push(mutation);
    }

    fn accept_send(&self, channel_id: ChannelId, content: String) -> StoreResult<MessageId> {
        let mut state = self.state.lock();
        if let Some(kind) = state.send_failure.clone() {
            return Err(StoreError::new(kind));
        }

        state.next_message_id += 1;
        let message_id = MessageId(state.next_message_id);
        if !state.skip_ingest {
            let author_id = state.current_user.unwrap_or(SYSTEM_USER);
            let record = MessageRecordBuilder::default()
                .id(message_id)
                .channel_id(channel_id)
                .author_id(author_id)
                .content(content)
                .build()
                .expect("valid message record");
            state
                .messages
                .entry(channel_id)
                .or_default()
                .push(RecordCell::new(record));
        }
        Ok(message_id)
    }
}

impl ChannelStore for MemoryBackend {
    fn channel(&self, id: ChannelId) -> Option<RecordCell<ChannelRecord>> {
        self.state
            .lock()
            .channels
            .iter()
            .find(|c| c.read(|r| r.id) == id)
            .cloned()
    }

    fn guild_channels(&self, guild_id: GuildId) -> Vec<RecordCell<ChannelRecord>> {
        self.state
            .lock()
            .channels
            .iter()
            .filter(|c| c.read(|r| r.guild_id) == Some(guild_id))
            .cloned()
            .collect()
    }

    fn default_channel(&self, guild_id: GuildId) -> Option<ChannelId> {
        self.state.lock().default_channels.get(&guild_id).copied()
    }
}

impl GuildStore for MemoryBackend {
    fn guild(&self, id: GuildId) -> Option<RecordCell<GuildRecord>> {
        self.state.lock().guilds.get(&id).cloned()
    }

    fn roles(&self, guild_id: GuildId) -> Vec<RoleRecord> {
        self.state
            .lock()
            .roles
            .get(&guild_id)
            .cloned()
            .unwrap_or_default()
    }

    fn member(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRecord> {
        self.state.lock().members.get(&(guild_id, user_id)).cloned()
    }
}

impl UserStore for MemoryBackend {
    fn user(&self, id: UserId) -> Option<RecordCell<UserRecord>> {
        self.state.lock().users.get(&id).cloned()
    }

    fn current_user_id(&self) -> Option<UserId> {
        self.state.lock().current_user
    }
}

impl MessageStore for MemoryBackend {
    fn messages(&self, channel_id: ChannelId) -> Vec<RecordCell<MessageRecord>> {
        self.state
            .lock()
            .messages
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }

    fn message(&self, channel_id: ChannelId, message_id: MessageId) -> Option<RecordCell<MessageRecord>> {
        self.state
            .lock()
            .messages
            .get(&channel_id)?
            .iter()
            .find(|m| m.read(|r| r.id) == message_id)
            .cloned()
    }

    fn has_more_after(&self, channel_id: ChannelId) -> bool {
        self.state
            .lock()
            .has_more_after
            .get(&channel_id)
            .copied()
            .unwrap_or(false)
    }
}

#[async_trait]
impl MessageTransport for MemoryBackend {
    async fn send_message(&self, channel_id: ChannelId, payload: MessagePayload) -> StoreResult<MessageId> {
        self.record(Mutation::SendMessage {
            channel_id,
            payload: payload.clone(),
        });
        self.accept_send(channel_id, payload.content().clone())
    }

    async fn send_invite(&self, channel_id: ChannelId, code: &str) -> StoreResult<MessageId> {
        self.record(Mutation::SendInvite {
            channel_id,
            code: code.to_string(),
        });
        self.accept_send(channel_id, format!("https://discord.gg/{code}"))
    }

    fn receive_message(&self, channel_id: ChannelId, message: MessageRecord) {
        self.record(Mutation::ReceiveMessage {
            channel_id,
            message_id: message.id,
        });
        self.insert_message(message);
    }

    fn jump_to_present(&self, channel_id: ChannelId, limit: usize) {
        self.record(Mutation::JumpToPresent { channel_id, limit });
    }

    fn jump_to_message(&self, channel_id: ChannelId, message_id: MessageId, flash: bool) {
        self.record(Mutation::JumpToMessage {
            channel_id,
            message_id,
            flash,
        });
    }
}

impl MessageFormatter for MemoryBackend {
    /// Trims whitespace and reports `:name:` tokens as unresolved emoji.
    fn parse(&self, _channel: &ChannelRecord, content: &str) -> MessagePayload {
        let invalid_emojis: Vec<String> = content
            .split_whitespace()
            .filter(|word| word.len() > 2 && word.starts_with(':') && word.ends_with(':'))
            .map(|word| word.trim_matches(':').to_string())
            .collect();
        MessagePayloadBuilder::default()
            .content(content.trim())
            .invalid_emojis(invalid_emojis)
            .build()
            .expect("valid payload")
    }

    fn create_bot_message(&self, channel_id: ChannelId, content: &str) -> MessageRecord {
        let id = {
            let mut state = self.state.lock();
            state.next_message_id += 1;
            MessageId(state.next_message_id)
        };
        MessageRecordBuilder::default()
            .id(id)
            .channel_id(channel_id)
            .author_id(SYSTEM_USER)
            .content(content)
            .local_only(true)
            .build()
            .expect("valid bot message")
    }
}

impl Navigator for MemoryBackend {
    fn transition_to(&self, target: NavigationTarget, channel_id: Option<ChannelId>) {
        {
            let mut state = self.state.lock();
            state.current_guild = match target {
                NavigationTarget::Guild(id) => Some(id),
                NavigationTarget::Home => None,
            };
            state.current_channel = channel_id;
        }
        self.record(Mutation::Transition { target, channel_id });
    }

    fn current_channel_id(&self) -> Option<ChannelId> {
        self.state.lock().current_channel
    }

    fn current_guild_id(&self) -> Option<GuildId> {
        self.state.lock().current_guild
    }
}

impl SettingsSurface for MemoryBackend {
    fn open_channel_settings(&self, channel_id: ChannelId, section: SettingsSection) {
        self.record(Mutation::OpenSettings {
            channel_id,
            section,
        });
    }
}
