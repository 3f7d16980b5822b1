//! Supporting entities and variant-specific accessors.

mod test_utils;

use chorus_core::{Permissions, UserId};
use chorus_interface::ChannelStore;
use chorus_model::{ChannelInfo, GuildChannel};
use test_utils::*;

#[test]
fn test_user_tags() {
    let f = fixture();
    let tag = |id| f.chorus.user_from_id(id).unwrap().tag();

    assert_eq!(tag(ME), "ada#0042");
    assert_eq!(tag(FRIEND), "grace");
    assert_eq!(tag(STRANGER), "linus");
}

#[test]
fn test_current_user() {
    let f = fixture();
    let me = f.chorus.current_user().unwrap();

    assert_eq!(me.id(), ME);
    assert!(me.is_current_user());
    assert!(!f.chorus.user_from_id(FRIEND).unwrap().is_current_user());
    assert!(!me.bot());
    assert_eq!(me.display_name(), "ada");
}

#[test]
fn test_guild_accessors() {
    let f = fixture();
    let guild = f.chorus.guild_from_id(GUILD).unwrap();

    assert_eq!(guild.name(), "Analytical Engines");
    assert_eq!(guild.owner().unwrap().username(), "owner");
    assert_eq!(guild.roles().len(), 3);
    assert_eq!(
        guild.default_channel(),
        f.chorus.channel_from_id(GENERAL)
    );
    assert!(!guild.is_selected());
}

#[test]
fn test_guild_members() {
    let f = fixture();
    let guild = f.chorus.guild_from_id(GUILD).unwrap();

    let me = guild.current_member().unwrap();
    assert_eq!(me.nick(), Some("countess"));
    assert_eq!(me.display_name().as_deref(), Some("countess"));
    assert!(me.roles().is_empty());
    assert_eq!(me.user().unwrap().id(), ME);

    let friend = guild.member(FRIEND).unwrap();
    assert_eq!(friend.display_name().as_deref(), Some("grace"));
    assert_eq!(friend.roles()[0].name(), "mods");
    assert!(friend.permissions().contains(Permissions::MANAGE_MESSAGES));
    assert_eq!(friend.guild().unwrap(), guild);

    assert!(guild.member(UserId(404)).is_none());
}

#[test]
fn test_owner_member_holds_everything() {
    let f = fixture();
    let guild = f.chorus.guild_from_id(GUILD).unwrap();

    assert_eq!(guild.member(OWNER).unwrap().permissions(), Permissions::all());
}

#[test]
fn test_message_accessors() {
    let f = fixture();
    let message = f.chorus.message_from_id(GENERAL, FIRST_MESSAGE).unwrap();

    assert_eq!(message.content(), "first");
    assert_eq!(message.author().unwrap().id(), FRIEND);
    assert_eq!(message.channel(), f.chorus.channel_from_id(GENERAL));
    assert!(!message.is_local_only());
    assert!(message.timestamp().is_none());

    message.jump_to(true);
    assert_eq!(
        f.backend.mutations(),
        vec![Mutation::JumpToMessage {
            channel_id: GENERAL,
            message_id: FIRST_MESSAGE,
            flash: true,
        }]
    );
}

#[test]
fn test_text_channel_accessors() {
    let f = fixture();
    let general = f.chorus.channel_from_id(GENERAL).unwrap();
    let text = general.as_guild_text().unwrap();

    assert_eq!(text.topic().as_deref(), Some("Difference engines"));
    assert!(!text.nsfw());
    assert_eq!(general.position(), Some(1));
    assert_eq!(general.guild_id(), Some(GUILD));
    assert_eq!(general.application_id(), None);
    assert!(text.is_default_channel());
    assert_eq!(text.guild().unwrap().id(), GUILD);

    let random = f.chorus.channel_from_id(RANDOM).unwrap();
    assert!(random.as_guild_text().unwrap().nsfw());
    assert!(!random.as_guild_text().unwrap().is_default_channel());
}

#[test]
fn test_nicks_read_live_record() {
    let f = fixture();
    let general = f.chorus.channel_from_id(GENERAL).unwrap();
    let text = general.as_guild_text().unwrap();
    assert!(text.nicks().is_empty());

    f.backend
        .channel(GENERAL)
        .unwrap()
        .write()
        .nicks
        .insert(FRIEND, "countess".to_string());

    let nicks = text.nicks();
    assert_eq!(nicks.len(), 1);
    assert_eq!(nicks.get(&FRIEND).map(String::as_str), Some("countess"));
}

#[test]
fn test_voice_channel_accessors() {
    let f = fixture();
    let voice = f.chorus.channel_from_id(VOICE).unwrap();
    let voice = voice.as_guild_voice().unwrap();

    assert_eq!(voice.user_limit(), Some(10));
    assert_eq!(voice.bitrate(), Some(64000));
    assert_eq!(voice.name().as_deref(), Some("Lounge"));
}

#[test]
fn test_direct_message_recipient() {
    let f = fixture();
    let dm = f.chorus.channel_from_id(DM).unwrap();
    let dm = dm.as_direct_message().unwrap();

    assert_eq!(dm.recipient_id(), Some(FRIEND));
    assert_eq!(dm.recipient(), f.chorus.user_from_id(FRIEND));
    assert_eq!(dm.guild_id(), None);
}

#[test]
fn test_group_members_and_owner() {
    let f = fixture();
    let group = f.chorus.channel_from_id(GROUP).unwrap();
    let group = group.as_group().unwrap();

    let members: Vec<_> = group.members().iter().map(|u| u.id()).collect();
    assert_eq!(members, vec![FRIEND, STRANGER]);
    assert_eq!(group.owner_id(), Some(FRIEND));
    assert_eq!(group.owner().unwrap().username(), "grace");
    assert_eq!(group.icon().as_deref(), Some("cog"));
}

#[test]
fn test_roles_expose_record_fields() {
    let f = fixture();
    let guild = f.chorus.guild_from_id(GUILD).unwrap();
    let mods = guild
        .roles()
        .into_iter()
        .find(|r| r.id() == MOD_ROLE)
        .unwrap();

    assert!(mods.hoist());
    assert_eq!(mods.position(), 2);
    assert_eq!(mods.color(), 0);
    assert_eq!(mods.permissions(), Permissions::MANAGE_MESSAGES);
    assert!(!mods.is_everyone());
    assert_eq!(mods.guild_id(), GUILD);
    assert_eq!(mods.guild().unwrap(), guild);
}
