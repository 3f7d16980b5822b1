//! State shared by every channel variant.

use crate::Chorus;
use chorus_core::{ChannelId, ChannelKind, ChannelRecord, RecordCell};

/// The identity-cached part of a channel: a handle to the store's record plus
/// the discriminant it was built with.
///
/// Variant wrappers are thin handles around a shared `ChannelCore`, so two
/// wrappers for the same record point at the same core.
#[derive(Debug)]
pub struct ChannelCore {
    context: Chorus,
    record: RecordCell<ChannelRecord>,
    kind: ChannelKind,
}

impl ChannelCore {
    pub(crate) fn new(context: Chorus, record: RecordCell<ChannelRecord>) -> Self {
        let kind = record.read(|r| ChannelKind::from(r.kind));
        tracing::debug!(%kind, "Building channel wrapper");
        Self {
            context,
            record,
            kind,
        }
    }

    /// The context this channel was materialized through.
    pub fn context(&self) -> &Chorus {
        &self.context
    }

    /// The store's live record.
    pub fn record(&self) -> &RecordCell<ChannelRecord> {
        &self.record
    }

    /// Kind fixed at construction.
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Live channel id.
    pub fn id(&self) -> ChannelId {
        self.record.read(|r| r.id)
    }
}
