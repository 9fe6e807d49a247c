//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while acquiring upstream data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response
    #[error("HTTP error {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The upstream provider rejected the symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Rate limit error
    #[error("Rate limit exceeded{}", .retry_after_secs.map(|s| format!(", retry after {s}s")).unwrap_or_default())]
    RateLimited {
        /// Seconds to wait before retrying, when the provider says so
        retry_after_secs: Option<u64>,
    },

    /// Data parsing error
    #[error("Data parsing error: {0}")]
    Parse(String),

    /// No API key configured
    #[error("Finnhub API key is not configured (set FINNHUB_API_KEY)")]
    MissingApiKey,

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DataError {
    /// Returns true when the upstream confirmed the symbol does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidSymbol(_))
    }
}
