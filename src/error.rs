//! Error types for dbn-utils operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dbn-utils operations.
///
/// Every operation in this crate is pure, so the only failure is a
/// precondition violation detected at the call boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was non-finite, fractional where an integer was required,
    /// or out of the representable range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidArgument`] and log it at debug level.
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejecting argument `{name}`: {reason}");
        Self::InvalidArgument { name, reason }
    }
}
