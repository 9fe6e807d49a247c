//! Service-level errors.

use tenk_analytics::SelectionError;
use tenk_data::DataError;
use thiserror::Error;

/// Errors surfaced by [`FinancialsService`](crate::FinancialsService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The symbol is unknown or the upstream has nothing for it
    #[error("{reason}")]
    NotFound {
        /// Requested symbol
        symbol: String,
        /// Human-readable diagnostic
        reason: String,
    },

    /// Filings exist but none is an annual 10-K report
    #[error("No 10-K annual reports found for {symbol} after filtering.")]
    NoAnnualFilings {
        /// Requested symbol
        symbol: String,
        /// Number of filings received before filtering
        total: usize,
    },

    /// Any other acquisition failure
    #[error(transparent)]
    Upstream(#[from] DataError),
}

impl ServiceError {
    pub(crate) fn not_found(symbol: &str, reason: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    /// Map an acquisition failure, turning a rejected symbol into `NotFound`.
    pub(crate) fn from_upstream(symbol: &str, err: DataError) -> Self {
        if err.is_not_found() {
            Self::not_found(symbol, format!("Symbol {symbol} not found: {err}"))
        } else {
            Self::Upstream(err)
        }
    }

    /// Map an empty filing selection.
    pub(crate) fn from_selection(symbol: &str, err: SelectionError) -> Self {
        match err {
            SelectionError::NoFilings => Self::not_found(
                symbol,
                format!(
                    "No annual financial reports found for {symbol}. It might be an invalid symbol or data is not available."
                ),
            ),
            SelectionError::NoAnnualFilings { total } => Self::NoAnnualFilings {
                symbol: symbol.to_string(),
                total,
            },
        }
    }

    /// Status code a request handler would answer with.
    pub const fn status_hint(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::NoAnnualFilings { .. } => 404,
            Self::Upstream(_) => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_messages() {
        let err = ServiceError::from_selection("ZZZZ", SelectionError::NoFilings);
        assert_eq!(
            err.to_string(),
            "No annual financial reports found for ZZZZ. It might be an invalid symbol or data is not available."
        );
        assert_eq!(err.status_hint(), 404);

        let err = ServiceError::from_selection("ACME", SelectionError::NoAnnualFilings { total: 3 });
        assert_eq!(
            err.to_string(),
            "No 10-K annual reports found for ACME after filtering."
        );
        assert_eq!(err.status_hint(), 404);
    }

    #[test]
    fn test_upstream_mapping() {
        let err = ServiceError::from_upstream("ZZZZ", DataError::InvalidSymbol("Invalid symbol".into()));
        assert!(matches!(err, ServiceError::NotFound { ref symbol, .. } if symbol == "ZZZZ"));

        let err = ServiceError::from_upstream(
            "AAPL",
            DataError::RateLimited {
                retry_after_secs: None,
            },
        );
        assert!(matches!(err, ServiceError::Upstream(DataError::RateLimited { .. })));
        assert_eq!(err.status_hint(), 502);
    }
}
