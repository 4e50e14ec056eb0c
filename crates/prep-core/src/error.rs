//! Error types for the PREP application.

use thiserror::Error;

/// A shared error type for the entire PREP application.
///
/// This provides typed, structured error variants so callers can decide
/// how to recover: external-service failures keep the session where it is,
/// invalid input turns into a re-prompt, and nothing here is fatal for the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepError {
    /// The external text generator was unreachable, failed, timed out,
    /// or returned an unusable (empty) result.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// User input that does not match an expected choice for the
    /// current stage. The message is the re-prompt shown to the user.
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error (missing credentials, bad settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PrepError {
    /// Creates an ExternalService error
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalService(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an ExternalService error
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<String> for PrepError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, PrepError>`.
pub type Result<T> = std::result::Result<T, PrepError>;
