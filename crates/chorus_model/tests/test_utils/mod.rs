//! Test utilities for Chorus model tests.
//!
//! This module provides an in-memory store and a populated fixture guild.

#![allow(dead_code)]

pub mod memory_backend;

#[allow(unused_imports)]
pub use memory_backend::{MemoryBackend, Mutation, SYSTEM_USER};

use chorus_core::{
    ChannelId, ChannelRecordBuilder, GuildId, GuildRecordBuilder, MemberRecordBuilder, MessageId,
    MessageRecordBuilder, OverwriteRecordBuilder, Permissions, RoleId, RoleRecordBuilder, UserId,
    UserRecordBuilder,
};
use chorus_model::Chorus;
use std::sync::Arc;

pub const GUILD: GuildId = GuildId(100);
pub const OWNER: UserId = UserId(5);
pub const ME: UserId = UserId(2);
pub const FRIEND: UserId = UserId(3);
pub const STRANGER: UserId = UserId(4);

pub const MUTED_ROLE: RoleId = RoleId(300);
pub const MOD_ROLE: RoleId = RoleId(301);

pub const CATEGORY: ChannelId = ChannelId(10);
pub const GENERAL: ChannelId = ChannelId(11);
pub const VOICE: ChannelId = ChannelId(12);
pub const ANNOUNCEMENTS: ChannelId = ChannelId(13);
pub const RANDOM: ChannelId = ChannelId(14);
pub const SECRET: ChannelId = ChannelId(15);
pub const DM: ChannelId = ChannelId(20);
pub const GROUP: ChannelId = ChannelId(21);
pub const FORUM: ChannelId = ChannelId(30);
pub const LOBBY: ChannelId = ChannelId(31);

pub const FIRST_MESSAGE: MessageId = MessageId(500);
pub const LAST_MESSAGE: MessageId = MessageId(501);

/// A backend plus the context materializing over it.
pub struct Fixture {
    pub backend: Arc<MemoryBackend>,
    pub chorus: Chorus,
}

/// A guild the acting user belongs to with `@everyone` able to view and send,
/// plus private conversations and channels of unspecialized kinds.
///
/// Store channel order: CATEGORY, GENERAL, VOICE, ANNOUNCEMENTS, RANDOM,
/// SECRET, DM, GROUP, FORUM, LOBBY.
pub fn fixture() -> Fixture {
    let backend = Arc::new(MemoryBackend::new());

    for (id, username, discriminator) in [
        (ME, "ada", Some("0042")),
        (FRIEND, "grace", Some("0")),
        (STRANGER, "linus", None),
        (OWNER, "owner", Some("0001")),
    ] {
        let mut builder = UserRecordBuilder::default();
        builder.id(id).username(username);
        if let Some(discriminator) = discriminator {
            builder.discriminator(discriminator);
        }
        backend.insert_user(builder.build().expect("valid user"));
    }
    backend.set_current_user(Some(ME));

    backend.insert_guild(
        GuildRecordBuilder::default()
            .id(GUILD)
            .name("Analytical Engines")
            .owner_id(OWNER)
            .build()
            .expect("valid guild"),
    );
    backend.insert_role(
        GUILD,
        RoleRecordBuilder::default()
            .id(RoleId::from(GUILD))
            .name("@everyone")
            .permissions(
                Permissions::VIEW_CHANNEL
                    | Permissions::SEND_MESSAGES
                    | Permissions::READ_MESSAGE_HISTORY,
            )
            .build()
            .expect("valid role"),
    );
    backend.insert_role(
        GUILD,
        RoleRecordBuilder::default()
            .id(MUTED_ROLE)
            .name("muted")
            .position(1)
            .build()
            .expect("valid role"),
    );
    backend.insert_role(
        GUILD,
        RoleRecordBuilder::default()
            .id(MOD_ROLE)
            .name("mods")
            .position(2)
            .permissions(Permissions::MANAGE_MESSAGES)
            .hoist(true)
            .build()
            .expect("valid role"),
    );
    backend.insert_member(
        MemberRecordBuilder::default()
            .guild_id(GUILD)
            .user_id(ME)
            .nick("countess")
            .build()
            .expect("valid member"),
    );
    backend.insert_member(
        MemberRecordBuilder::default()
            .guild_id(GUILD)
            .user_id(OWNER)
            .build()
            .expect("valid member"),
    );
    backend.insert_member(
        MemberRecordBuilder::default()
            .guild_id(GUILD)
            .user_id(FRIEND)
            .roles(vec![MOD_ROLE])
            .build()
            .expect("valid member"),
    );

    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(CATEGORY)
            .kind(4u8)
            .name("Text Channels")
            .guild_id(GUILD)
            .position(0)
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(GENERAL)
            .kind(0u8)
            .name("general")
            .guild_id(GUILD)
            .parent_id(CATEGORY)
            .position(1)
            .topic("Difference engines")
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(VOICE)
            .kind(2u8)
            .name("Lounge")
            .guild_id(GUILD)
            .parent_id(CATEGORY)
            .position(2)
            .user_limit(10u32)
            .bitrate(64000u32)
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(ANNOUNCEMENTS)
            .kind(0u8)
            .name("announcements")
            .guild_id(GUILD)
            .position(3)
            .permission_overwrites(vec![
                OverwriteRecordBuilder::default()
                    .id(GUILD.get())
                    .kind("role")
                    .deny(Permissions::SEND_MESSAGES)
                    .build()
                    .expect("valid overwrite"),
                OverwriteRecordBuilder::default()
                    .id(FRIEND.get())
                    .kind("member")
                    .allow(Permissions::SEND_MESSAGES)
                    .build()
                    .expect("valid overwrite"),
                OverwriteRecordBuilder::default()
                    .id(MOD_ROLE.get())
                    .kind("0")
                    .allow(Permissions::MENTION_EVERYONE)
                    .build()
                    .expect("valid overwrite"),
                OverwriteRecordBuilder::default()
                    .id(77u64)
                    .kind("everyone-but-bots")
                    .build()
                    .expect("valid overwrite"),
            ])
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(RANDOM)
            .kind(0u8)
            .name("random")
            .guild_id(GUILD)
            .parent_id(CATEGORY)
            .position(4)
            .nsfw(true)
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(SECRET)
            .kind(0u8)
            .name("secret")
            .guild_id(GUILD)
            .position(5)
            .permission_overwrites(vec![OverwriteRecordBuilder::default()
                .id(GUILD.get())
                .kind("role")
                .deny(Permissions::VIEW_CHANNEL)
                .build()
                .expect("valid overwrite")])
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(DM)
            .kind(1u8)
            .recipients(vec![FRIEND])
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(GROUP)
            .kind(3u8)
            .name("engine room")
            .recipients(vec![FRIEND, STRANGER, UserId(404)])
            .owner_id(FRIEND)
            .icon("cog")
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(FORUM)
            .kind(15u8)
            .name("forum")
            .guild_id(GUILD)
            .position(6)
            .build()
            .expect("valid channel"),
    );
    backend.insert_channel(
        ChannelRecordBuilder::default()
            .id(LOBBY)
            .kind(13u8)
            .name("lobby")
            .build()
            .expect("valid channel"),
    );
    backend.set_default_channel(GUILD, GENERAL);

    for (id, content) in [(FIRST_MESSAGE, "first"), (LAST_MESSAGE, "second")] {
        backend.insert_message(
            MessageRecordBuilder::default()
                .id(id)
                .channel_id(GENERAL)
                .author_id(FRIEND)
                .content(content)
                .build()
                .expect("valid message"),
        );
    }

    let chorus = Chorus::new(backend.clone());
    Fixture { backend, chorus }
}

/// Strip `SEND_MESSAGES` from `@everyone` so the acting user cannot post anywhere.
pub fn revoke_send(fixture: &Fixture) {
    fixture.backend.replace_roles(
        GUILD,
        vec![RoleRecordBuilder::default()
            .id(RoleId::from(GUILD))
            .name("@everyone")
            .permissions(Permissions::VIEW_CHANNEL)
            .build()
            .expect("valid role")],
    );
}
