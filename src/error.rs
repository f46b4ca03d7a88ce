//! Error types for profile selection.

use thiserror::Error;

/// Returned when a profile name is not one of the recognized registry keys.
///
/// The registry lookup itself never produces this: [`crate::Registry::get`]
/// answers `None` and leaves the policy to the caller. This type exists so
/// bootstrap code parsing a deployment flag can fail fast with a message
/// that names the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile '{name}', expected one of: development, production, default")]
pub struct UnknownProfileError {
    /// The value that failed to resolve.
    pub name: String,
}
