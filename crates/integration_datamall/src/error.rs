//! DataMall error types

use thiserror::Error;

/// Errors that can occur while talking to DataMall
#[derive(Debug, Error)]
pub enum DataMallError {
    /// Connection to DataMall failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from DataMall
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The account key was rejected
    #[error("Unauthorized: DataMall rejected the account key (HTTP {status})")]
    Unauthorized {
        /// HTTP status returned by the API
        status: u16,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DataMallError {
    /// Returns true if re-running the request could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}
