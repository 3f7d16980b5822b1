//! Base channel behavior shared by the variants.
//!
//! Variants call these with a [`Gate`] saying whether capability checks apply.

use super::ChannelCore;
use crate::{Chorus, Message};
use chorus_core::{Capability, ChannelId, MessageId, PermissionResolver, Permissions};
use chorus_error::{CapabilityError, ChorusError, ChorusResult, StoreError, StoreErrorKind, UnsupportedError};
use chorus_interface::{MessagePayload, NavigationTarget};
use tracing::{debug, instrument};

/// Whether an operation checks the acting user's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// Guild channel: capabilities are checked.
    Guild,
    /// Private or guildless channel: never checked.
    Open,
}

impl Gate {
    /// Gate for a channel whose kind does not settle it.
    pub(crate) fn from_record(core: &ChannelCore) -> Self {
        if core.record().read(|r| r.guild_id.is_some()) {
            Self::Guild
        } else {
            Self::Open
        }
    }
}

/// Resolve the acting user's permissions in a channel from store data.
///
/// Anything missing (acting user, guild, membership) resolves to nothing.
#[instrument(level = "debug", skip(core), fields(channel_id = %core.id()))]
pub(crate) fn effective_permissions(core: &ChannelCore) -> Permissions {
    let backend = core.context().backend();
    let (guild_id, overwrites) = core
        .record()
        .read(|r| (r.guild_id, r.permission_overwrites.clone()));

    let Some(guild_id) = guild_id else {
        debug!("Channel has no guild");
        return Permissions::empty();
    };
    let Some(user_id) = backend.current_user_id() else {
        debug!("No acting user");
        return Permissions::empty();
    };
    let Some(guild) = backend.guild(guild_id) else {
        debug!(%guild_id, "Guild not in store");
        return Permissions::empty();
    };
    let Some(member) = backend.member(guild_id, user_id) else {
        debug!(%guild_id, %user_id, "Acting user is not a member");
        return Permissions::empty();
    };

    let guild = guild.snapshot();
    let roles = backend.roles(guild_id);
    PermissionResolver::new(&guild, &roles, &member).for_channel(&overwrites)
}

pub(crate) fn check_capability(core: &ChannelCore, required: Permissions) -> bool {
    effective_permissions(core).contains(required)
}

#[track_caller]
pub(crate) fn assert_capability(core: &ChannelCore, name: &str, required: Permissions) -> ChorusResult<()> {
    if check_capability(core, required) {
        Ok(())
    } else {
        debug!(channel_id = %core.id(), capability = name, "Capability denied");
        Err(CapabilityError::new(name).into())
    }
}

#[track_caller]
fn require(core: &ChannelCore, gate: Gate, capability: Capability) -> ChorusResult<()> {
    match gate {
        Gate::Open => Ok(()),
        Gate::Guild => assert_capability(core, capability.as_ref(), capability.required()),
    }
}

/// Structural rejection for an operation the variant can never perform.
#[track_caller]
pub(crate) fn unsupported(core: &ChannelCore, operation: &'static str) -> ChorusError {
    debug!(channel_id = %core.id(), kind = %core.kind(), operation, "Rejecting unsupported operation");
    UnsupportedError::new(operation, core.kind().to_string()).into()
}

fn ingested(context: &Chorus, channel_id: ChannelId, message_id: MessageId) -> ChorusResult<Message> {
    context
        .message_from_id(channel_id, message_id)
        .ok_or_else(|| {
            StoreError::new(StoreErrorKind::MessageNotIngested {
                channel_id: channel_id.get(),
                message_id: message_id.get(),
            })
            .into()
        })
}

#[instrument(skip(core, content), fields(channel_id = %core.id()))]
pub(crate) async fn send_message(
    core: &ChannelCore,
    gate: Gate,
    content: &str,
    parse: bool,
) -> ChorusResult<Message> {
    require(core, gate, Capability::SendMessages)?;

    let context = core.context();
    let channel_id = core.id();
    let payload = if parse {
        let record = core.record().snapshot();
        context.backend().parse(&record, content)
    } else {
        MessagePayload::literal(content)
    };

    let message_id = context.backend().send_message(channel_id, payload).await?;
    debug!(%message_id, "Message sent");
    ingested(context, channel_id, message_id)
}

#[instrument(skip(core, content), fields(channel_id = %core.id()))]
pub(crate) fn send_bot_message(core: &ChannelCore, content: &str) -> ChorusResult<Message> {
    let context = core.context();
    let channel_id = core.id();
    let message = context.backend().create_bot_message(channel_id, content);
    let message_id = message.id;
    context.backend().receive_message(channel_id, message);
    ingested(context, channel_id, message_id)
}

pub(crate) fn messages(core: &ChannelCore) -> Vec<Message> {
    let context = core.context();
    context
        .backend()
        .messages(core.id())
        .into_iter()
        .map(|record| context.message(record))
        .collect()
}

pub(crate) fn has_more_after(core: &ChannelCore) -> bool {
    core.context().backend().has_more_after(core.id())
}

#[instrument(skip(core), fields(channel_id = %core.id()))]
pub(crate) fn jump_to_present(core: &ChannelCore, gate: Gate) -> ChorusResult<()> {
    require(core, gate, Capability::ViewChannel)?;

    let context = core.context();
    let channel_id = core.id();
    if has_more_after(core) {
        let limit = *context.config().max_messages_per_channel();
        debug!(limit, "Loading newest messages");
        context.backend().jump_to_present(channel_id, limit);
    } else if let Some(last) = messages(core).last() {
        last.jump_to(false);
    } else {
        debug!("No messages loaded, nothing to jump to");
    }
    Ok(())
}

#[instrument(skip(core, code), fields(channel_id = %core.id()))]
pub(crate) async fn send_invite(core: &ChannelCore, gate: Gate, code: &str) -> ChorusResult<Message> {
    require(core, gate, Capability::SendMessages)?;

    let context = core.context();
    let channel_id = core.id();
    let message_id = context.backend().send_invite(channel_id, code).await?;
    ingested(context, channel_id, message_id)
}

#[instrument(skip(core), fields(channel_id = %core.id()))]
pub(crate) fn select(core: &ChannelCore, gate: Gate) -> ChorusResult<()> {
    require(core, gate, Capability::ViewChannel)?;

    let (channel_id, guild_id) = core.record().read(|r| (r.id, r.guild_id));
    let target = NavigationTarget::from(guild_id);
    debug!(%target, "Selecting channel");
    core.context().backend().transition_to(target, Some(channel_id));
    Ok(())
}
