//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller passed an argument outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transit data could not be fetched; re-running may succeed
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// DataMall rejected the configured account key
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// DataMall answered with something that could not be used
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Nothing in the workspace retries automatically; callers use this to
    /// decide whether re-running the command is worthwhile.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_))
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
