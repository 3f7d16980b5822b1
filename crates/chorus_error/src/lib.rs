//! Error types for the Chorus entity model.
//!
//! This crate provides the foundation error types used throughout the Chorus workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Two leaf errors matter most to callers and are deliberately distinct:
//! - [`CapabilityError`] - the acting user lacks a permission on a guild channel
//! - [`UnsupportedError`] - the channel kind can never perform the operation
//!
//! # Examples
//!
//! ```
//! use chorus_error::{CapabilityError, ChorusResult};
//!
//! fn post() -> ChorusResult<()> {
//!     Err(CapabilityError::new("SEND_MESSAGES"))?
//! }
//!
//! let err = post().unwrap_err();
//! assert!(err.is_capability_denied());
//! assert!(err.is_recoverable());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod store;
mod unsupported;

pub use capability::CapabilityError;
pub use config::ConfigError;
pub use error::{ChorusError, ChorusErrorKind, ChorusResult};
pub use store::{StoreError, StoreErrorKind, StoreResult};
pub use unsupported::UnsupportedError;
