//! Error types for host operations.
//!
//! Two kinds of failure exist at this layer:
//!
//! - [`HostError::Unconfigured`] - raised by a test double when an operation
//!   is invoked without a bound behavior. Identifies the operation by name.
//! - [`HostError::Injected`] - any failure produced by the host (or, in a
//!   test double, by the behavior the test bound). Carried transparently,
//!   never wrapped or reinterpreted.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by host operations.
#[derive(Error, Debug)]
pub enum HostError {
    /// The operation was invoked on a test double with no behavior bound to
    /// its slot. Indicates missing test setup; meant to fail the test
    /// immediately rather than succeed silently.
    #[error("no behavior bound for operation `{0}`")]
    Unconfigured(&'static str),

    /// A failure produced by the operation's behavior itself. Passed through
    /// to the caller exactly as produced.
    #[error(transparent)]
    Injected(BoxError),
}

impl HostError {
    /// Build an injected failure from any error value or message.
    pub fn injected(err: impl Into<BoxError>) -> Self {
        HostError::Injected(err.into())
    }

    /// The name of the unconfigured operation, if this is a configuration
    /// error.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            HostError::Unconfigured(op) => Some(op),
            HostError::Injected(_) => None,
        }
    }

    /// Whether this error reports a missing binding rather than an injected
    /// failure.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, HostError::Unconfigured(_))
    }
}

impl From<BoxError> for HostError {
    fn from(err: BoxError) -> Self {
        HostError::Injected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_names_the_operation() {
        let err = HostError::Unconfigured("wallet_update");
        assert!(err.is_unconfigured());
        assert_eq!(err.operation(), Some("wallet_update"));
        assert_eq!(
            err.to_string(),
            "no behavior bound for operation `wallet_update`"
        );
    }

    #[test]
    fn injected_is_transparent() {
        let err = HostError::injected("host rejected request");
        assert!(!err.is_unconfigured());
        assert_eq!(err.operation(), None);
        assert_eq!(err.to_string(), "host rejected request");
    }
}
