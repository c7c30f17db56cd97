//! Domain errors for market-data fetching.

use thiserror::Error;

/// Errors raised while fetching ranked coin listings from a provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The caller asked for zero coins; no request was made
    #[error("Invalid coin count: {0}. Must be at least 1")]
    InvalidCount(u32),

    /// The request did not complete within the client timeout
    #[error("Request to market-data provider timed out: {0}")]
    Timeout(String),

    /// Connection, DNS or other transport failure
    #[error("Request to market-data provider failed: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("Market-data provider returned {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// The body was not a JSON array of objects
    #[error("Invalid market-data response: {0}")]
    InvalidResponse(String),
}

impl MarketDataError {
    /// Whether the error came from the transport or the provider rather than
    /// from the caller's arguments.
    pub const fn is_provider_failure(&self) -> bool {
        !matches!(self, Self::InvalidCount(_))
    }
}

/// Result type for market-data operations
pub type MarketDataResult<T> = Result<T, MarketDataError>;
