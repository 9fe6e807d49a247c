#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tenk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assembler;
pub mod assessment;
pub mod concepts;
pub mod error;
pub mod growth;
pub mod health;
pub mod metrics;
pub mod profile;
pub mod ratios;
pub mod report;
pub mod resolver;
pub mod selector;
pub mod statements;

pub use assembler::ReportAssembler;
pub use assessment::{Liquidity, Profitability, ValuationStatus};
pub use concepts::{ConceptMap, Slot};
pub use error::SelectionError;
pub use growth::{GrowthPair, PriorPeriod, yoy_growth};
pub use health::{HealthStatus, assess};
pub use metrics::KeyMetrics;
pub use profile::CompanyProfile;
pub use ratios::{RatioInputs, RatioSet, compute_ratios};
pub use report::{NormalizedFiling, Report};
pub use resolver::resolve;
pub use selector::select_annual;
pub use statements::{BalanceSheet, CashFlowStatement, IncomeStatement, NormalizedItem};

/// Round to `places` decimal places.
///
/// Rounds the exact binary value, with ties to even, through the correctly
/// rounded decimal formatter. Scaling by a power of ten first can manufacture
/// a tie that the stored value does not have. Non-finite values pass through
/// unchanged.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}")
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .unwrap_or(value)
}
