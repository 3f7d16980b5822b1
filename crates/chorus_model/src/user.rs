//! User accounts.

use crate::Chorus;
use chorus_core::{RecordCell, UserId, UserRecord};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct UserCore {
    context: Chorus,
    record: RecordCell<UserRecord>,
}

impl UserCore {
    pub(crate) fn new(context: Chorus, record: RecordCell<UserRecord>) -> Self {
        Self { context, record }
    }

    pub(crate) fn record(&self) -> &RecordCell<UserRecord> {
        &self.record
    }
}

/// A user account. Identity-cached: one live handle per record.
#[derive(Debug, Clone)]
pub struct User {
    core: Arc<UserCore>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for User {}

impl User {
    pub(crate) fn new(core: Arc<UserCore>) -> Self {
        Self { core }
    }

    /// User id.
    pub fn id(&self) -> UserId {
        self.core.record.read(|r| r.id)
    }

    /// Account name.
    pub fn username(&self) -> String {
        self.core.record.read(|r| r.username.clone())
    }

    /// Legacy discriminator.
    pub fn discriminator(&self) -> Option<String> {
        self.core.record.read(|r| r.discriminator.clone())
    }

    /// `username#discriminator`, or just the username for accounts without one.
    pub fn tag(&self) -> String {
        self.core.record.read(|r| match r.discriminator.as_deref() {
            Some(discriminator) if discriminator != "0" => {
                format!("{}#{}", r.username, discriminator)
            }
            _ => r.username.clone(),
        })
    }

    /// Display name, falling back to the username.
    pub fn display_name(&self) -> String {
        self.core
            .record
            .read(|r| r.global_name.clone().unwrap_or_else(|| r.username.clone()))
    }

    /// Avatar hash.
    pub fn avatar(&self) -> Option<String> {
        self.core.record.read(|r| r.avatar.clone())
    }

    /// Bot account flag.
    pub fn bot(&self) -> bool {
        self.core.record.read(|r| r.bot)
    }

    /// Whether this is the acting user.
    pub fn is_current_user(&self) -> bool {
        self.core.context.backend().current_user_id() == Some(self.id())
    }
}
