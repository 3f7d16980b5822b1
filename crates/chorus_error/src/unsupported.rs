//! Structurally unsupported operation errors.

/// An operation that the entity's variant can never perform.
///
/// Messaging a voice channel or selecting a category fails this way no matter
/// which permissions the acting user holds.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display(
    "Unsupported Operation: cannot {} on a {} channel at line {} in {}",
    operation,
    kind,
    line,
    file
)]
pub struct UnsupportedError {
    /// Operation that was attempted (e.g. `send_message`)
    operation: &'static str,
    /// Display name of the variant that rejected it (e.g. `GUILD_VOICE`)
    kind: String,
    /// Line number where the error occurred
    line: u32,
    /// File where the error occurred
    file: &'static str,
}

impl UnsupportedError {
    /// Create a new UnsupportedError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chorus_error::UnsupportedError;
    ///
    /// let err: &'static UnsupportedError =
    ///     Box::leak(Box::new(UnsupportedError::new("select", "GUILD_CATEGORY")));
    /// assert_eq!(err.operation(), "select");
    /// assert!(err.to_string().contains("GUILD_CATEGORY"));
    /// ```
    #[track_caller]
    pub fn new(operation: &'static str, kind: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation,
            kind: kind.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
