//! Variant selection by discriminant.

mod test_utils;

use chorus_core::{ChannelId, ChannelKind, ChannelRecordBuilder};
use chorus_interface::ChannelStore;
use chorus_model::{Channel, ChannelInfo};
use test_utils::*;

#[test]
fn test_known_discriminants_select_variants() {
    let f = fixture();
    let variant = |id| f.chorus.channel_from_id(id).expect("fixture channel");

    assert!(matches!(variant(GENERAL), Channel::GuildText(_)));
    assert!(matches!(variant(DM), Channel::DirectMessage(_)));
    assert!(matches!(variant(VOICE), Channel::GuildVoice(_)));
    assert!(matches!(variant(GROUP), Channel::Group(_)));
    assert!(matches!(variant(CATEGORY), Channel::Category(_)));
}

#[test]
fn test_unknown_discriminant_falls_back_to_base() {
    let f = fixture();

    let forum = f.chorus.channel_from_id(FORUM).unwrap();
    assert!(forum.as_base().is_some());
    assert_eq!(forum.kind(), ChannelKind::Unknown(15));
    assert_eq!(forum.kind().to_string(), "UNKNOWN(15)");
    assert_eq!(forum.name().as_deref(), Some("forum"));
}

#[test]
fn test_kind_names() {
    let f = fixture();
    let kind = |id| f.chorus.channel_from_id(id).unwrap().kind().to_string();

    assert_eq!(kind(GENERAL), "GUILD_TEXT");
    assert_eq!(kind(DM), "DM");
    assert_eq!(kind(VOICE), "GUILD_VOICE");
    assert_eq!(kind(GROUP), "GROUP_DM");
    assert_eq!(kind(CATEGORY), "GUILD_CATEGORY");
}

#[test]
fn test_kind_change_does_not_redispatch_live_wrapper() {
    let f = fixture();
    let record = f.backend.channel(GENERAL).unwrap();
    let channel = f.chorus.channel(record.clone());

    record.write().kind = 2;

    let again = f.chorus.channel(record);
    assert_eq!(channel, again);
    assert!(again.as_guild_text().is_some());
    assert_eq!(again.kind(), ChannelKind::GuildText);
}

#[test]
fn test_kind_change_applies_after_wrapper_dropped() {
    let f = fixture();
    let record = f.backend.channel(GENERAL).unwrap();
    drop(f.chorus.channel(record.clone()));

    record.write().kind = 2;

    let rebuilt = f.chorus.channel(record);
    assert!(rebuilt.as_guild_voice().is_some());
}

#[test]
fn test_guild_channel_view_only_for_guild_variants() {
    let f = fixture();
    let guild_channel = |id| {
        f.chorus
            .channel_from_id(id)
            .unwrap()
            .as_guild_channel()
            .is_some()
    };

    assert!(guild_channel(GENERAL));
    assert!(guild_channel(VOICE));
    assert!(guild_channel(CATEGORY));
    assert!(!guild_channel(DM));
    assert!(!guild_channel(GROUP));
    assert!(!guild_channel(FORUM));
}

#[test]
fn test_raw_json_record_dispatches() {
    let f = fixture();
    let record = serde_json::from_str(r#"{"id": "40", "type": 2, "guild_id": "100", "bitrate": 96000}"#)
        .expect("valid channel json");
    let cell = f.backend.insert_channel(record);

    let channel = f.chorus.channel(cell);
    let voice = channel.as_guild_voice().expect("voice variant");
    assert_eq!(voice.bitrate(), Some(96000));
    assert_eq!(channel.id(), ChannelId(40));
}

#[test]
fn test_private_flags() {
    let f = fixture();
    assert!(f.chorus.channel_from_id(DM).unwrap().is_private());
    assert!(f.chorus.channel_from_id(GROUP).unwrap().is_private());
    assert!(!f.chorus.channel_from_id(LOBBY).unwrap().is_private());

    let minimal = ChannelRecordBuilder::default()
        .id(ChannelId(41))
        .kind(1u8)
        .build()
        .unwrap();
    let dm = f.chorus.channel(f.backend.insert_channel(minimal));
    assert!(dm.as_direct_message().unwrap().recipient_id().is_none());
}
