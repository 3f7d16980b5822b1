//! Collaborator traits for the Chorus entity model.
//!
//! The entity model never owns data. Everything it knows comes from the live
//! store through these traits, and every side effect goes back out through
//! them. A host application implements them once over its real store and
//! hands the result to the model as a [`Backend`].

mod traits;
mod types;

pub use traits::{
    Backend, ChannelStore, GuildStore, MessageFormatter, MessageStore, MessageTransport, Navigator,
    SettingsSurface, UserStore,
};
pub use types::{MessagePayload, MessagePayloadBuilder, NavigationTarget, SettingsSection};
