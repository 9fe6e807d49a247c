//! Finnhub data source.
//!
//! Provides the raw payload shapes and an HTTP client implementing
//! [`UpstreamSource`].

pub mod client;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, FINNHUB_BASE_URL, FinnhubClient, PeriodType, UpstreamSource};
pub use types::{
    RawBasicFinancials, RawCompanyProfile, RawConceptItem, RawFilingRecord, RawMetricBundle,
    RawReportedFinancials, RawStatementSections,
};
