//! Variant selection.

use super::{
    BaseChannel, Channel, ChannelCategory, ChannelCore, DirectMessageChannel, GroupChannel,
    GuildTextChannel, GuildVoiceChannel,
};
use chorus_core::ChannelKind;
use std::sync::Arc;

/// Wrap a cached core in the variant its construction-time kind selects.
///
/// Unknown kinds fall back to [`BaseChannel`] and never fail.
pub(crate) fn dispatch(core: Arc<ChannelCore>) -> Channel {
    let kind = core.kind();
    tracing::trace!(%kind, "Dispatching channel variant");
    match kind {
        ChannelKind::GuildText => GuildTextChannel::from_core(core).into(),
        ChannelKind::DirectMessage => DirectMessageChannel::from_core(core).into(),
        ChannelKind::GuildVoice => GuildVoiceChannel::from_core(core).into(),
        ChannelKind::GroupDirectMessage => GroupChannel::from_core(core).into(),
        ChannelKind::GuildCategory => ChannelCategory::from_core(core).into(),
        ChannelKind::Unknown(_) => BaseChannel::from_core(core).into(),
    }
}
