//! Capability (permission) denial errors.

/// The acting user lacks a named capability on a guild channel.
///
/// Raised before any store mutation happens. Callers typically surface it to
/// the user; it is never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Capability Denied: {} at line {} in {}", capability, line, file)]
pub struct CapabilityError {
    /// Name of the missing capability (e.g. `SEND_MESSAGES`)
    capability: String,
    /// Line number where the error occurred
    line: u32,
    /// File where the error occurred
    file: &'static str,
}

impl CapabilityError {
    /// Create a new CapabilityError for the named capability at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chorus_error::CapabilityError;
    ///
    /// let err = CapabilityError::new("VIEW_CHANNEL");
    /// assert_eq!(err.capability(), "VIEW_CHANNEL");
    /// ```
    #[track_caller]
    pub fn new(capability: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            capability: capability.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
