//! Errors reported by the live store and its transport.

/// Specific store failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// The request never reached the remote service or the connection dropped.
    #[display("Transport failure: {}", _0)]
    Transport(String),

    /// The remote service answered with a failure status.
    #[display("Request rejected with status {}: {}", status, reason)]
    Rejected {
        /// HTTP-like status code
        status: u16,
        /// Reason reported by the service
        reason: String,
    },

    /// A send succeeded but the store has not ingested the created message yet.
    #[display("Message {} in channel {} is not in the store yet", message_id, channel_id)]
    MessageNotIngested {
        /// Channel the message was sent to
        channel_id: u64,
        /// Message id returned by the service
        message_id: u64,
    },
}

/// Store error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    kind: StoreErrorKind,
    line: u32,
    file: &'static str,
}

impl StoreError {
    /// Create a new store error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use chorus_error::{StoreError, StoreErrorKind};
    ///
    /// let err = StoreError::new(StoreErrorKind::Transport("reset by peer".into()));
    /// assert!(err.to_string().contains("reset by peer"));
    /// ```
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoreErrorKind {
        &self.kind
    }
}

/// Result type for store collaborator calls.
pub type StoreResult<T> = Result<T, StoreError>;
