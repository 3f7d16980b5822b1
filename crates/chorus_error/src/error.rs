//! Top-level error wrapper types.

use crate::{CapabilityError, ConfigError, StoreError, UnsupportedError};

/// Every error condition an entity operation can surface.
///
/// # Examples
///
/// ```
/// use chorus_error::{ChorusError, ChorusErrorKind, UnsupportedError};
///
/// let err: ChorusError = UnsupportedError::new("send_message", "GUILD_VOICE").into();
/// assert!(matches!(err.kind(), ChorusErrorKind::Unsupported(_)));
/// assert!(format!("{}", err).contains("Unsupported Operation"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChorusErrorKind {
    /// Acting user lacks a capability
    #[from(CapabilityError)]
    Capability(CapabilityError),
    /// Operation is invalid for the entity's variant
    #[from(UnsupportedError)]
    Unsupported(UnsupportedError),
    /// Store or transport failure, propagated unchanged
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Chorus error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chorus_error::{ChorusResult, ConfigError};
///
/// fn might_fail() -> ChorusResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chorus Error: {}", _0)]
pub struct ChorusError(Box<ChorusErrorKind>);

impl ChorusError {
    /// Create a new error from a kind.
    pub fn new(kind: ChorusErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChorusErrorKind {
        &self.0
    }

    /// Whether the acting user was missing a capability.
    pub fn is_capability_denied(&self) -> bool {
        matches!(self.kind(), ChorusErrorKind::Capability(_))
    }

    /// Whether the operation is structurally invalid for the variant.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), ChorusErrorKind::Unsupported(_))
    }

    /// Name of the denied capability, if this is a capability error.
    pub fn denied_capability(&self) -> Option<&str> {
        match self.kind() {
            ChorusErrorKind::Capability(e) => Some(e.capability().as_str()),
            _ => None,
        }
    }

    /// Whether the caller can reasonably recover (e.g. by telling the user).
    ///
    /// Unsupported operations and configuration errors are usage bugs.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ChorusErrorKind::Capability(_) | ChorusErrorKind::Store(_)
        )
    }
}

// Generic From implementation for any type that converts to ChorusErrorKind
impl<T> From<T> for ChorusError
where
    T: Into<ChorusErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Chorus operations.
pub type ChorusResult<T> = std::result::Result<T, ChorusError>;
