//! Command utility error types.
//!
//! Small marker errors the binary classifies with `downcast_ref` to pick an
//! exit code. Usage-class failures (bad flag combinations, unreadable
//! stdin) exit 1; everything remote or configuration-related exits with the
//! service failure code.

/// Error indicating an invalid flag/argument combination.
///
/// Raised by plan validation before any credential read or network access.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    /// Build a usage error from anything stringy.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Error indicating standard input could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read standard input: {0}")]
pub struct StdinReadError(#[from] pub std::io::Error);

/// Check if an error chain contains a usage-class failure.
pub fn is_usage_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<UsageError>().is_some() || err.downcast_ref::<StdinReadError>().is_some()
}
