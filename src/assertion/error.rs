//! Error type produced by the assertion helpers.

use thiserror::Error;

/// The outcome of an assertion helper.
pub type AssertionResult = Result<(), AssertionError>;

/// A failed assertion.
///
/// Argument assertions check values supplied by a caller; state assertions
/// check the state of the object an operation runs against. `Display` shows
/// the message alone.
///
/// # Examples
///
/// ```rust
/// use domain_kit::assertion::{self, AssertionError};
///
/// let error = assertion::not_empty("  ", "name").unwrap_err();
/// assert!(error.is_argument_error());
/// assert_eq!(error.to_string(), "name must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// An argument failed validation.
    #[error("{0}")]
    Argument(String),

    /// The receiver was in the wrong state for the operation.
    #[error("{0}")]
    State(String),
}

impl AssertionError {
    /// Returns `true` for [`AssertionError::Argument`].
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// Returns `true` for [`AssertionError::State`].
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Argument(message) | Self::State(message) => message,
        }
    }

    pub(crate) fn argument(message: impl Into<String>) -> Self {
        let error = Self::Argument(message.into());
        tracing::debug!(kind = "argument", message = error.message(), "assertion failed");
        error
    }

    pub(crate) fn state(message: impl Into<String>) -> Self {
        let error = Self::State(message.into());
        tracing::debug!(kind = "state", message = error.message(), "assertion failed");
        error
    }
}
