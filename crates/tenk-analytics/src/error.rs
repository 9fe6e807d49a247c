//! Error types for filing selection.

use thiserror::Error;

/// Why filing selection produced nothing to analyse.
///
/// The two variants let callers tell an unknown symbol apart from a symbol
/// that simply has no annual filings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The upstream returned no filing list, or an empty one
    #[error("no filings available")]
    NoFilings,

    /// Filings exist but none is an annual 10-K with statements attached
    #[error("none of {total} filings is an annual 10-K report")]
    NoAnnualFilings {
        /// Number of filings received before filtering
        total: usize,
    },
}
