#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tenk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod finnhub;

pub use cache::{CacheConfig, CacheKey, UpstreamCache};
pub use error::{DataError, Result};
pub use finnhub::{
    FinnhubClient, PeriodType, RawBasicFinancials, RawCompanyProfile, RawConceptItem,
    RawFilingRecord, RawMetricBundle, RawReportedFinancials, RawStatementSections,
    UpstreamSource,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
