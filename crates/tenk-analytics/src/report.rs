//! Normalized report types.

use crate::growth::GrowthPair;
use crate::health::HealthStatus;
use crate::ratios::RatioSet;
use crate::statements::{BalanceSheet, CashFlowStatement, IncomeStatement};
use serde::{Deserialize, Serialize};

/// One normalized annual filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFiling {
    /// Ticker symbol as reported on the filing
    pub symbol: String,
    /// SEC accession number
    pub access_number: String,
    /// Form type
    pub form_type: String,
    /// Fiscal year
    pub year: i32,
    /// Fiscal quarter, 0 for annual
    pub quarter: i32,
    /// Period start
    pub start_date: Option<String>,
    /// Period end
    pub end_date: Option<String>,
    /// Filing date
    pub filed_date: Option<String>,
    /// Acceptance date
    pub accepted_date: Option<String>,
    /// Income statement, when at least one slot resolved
    pub income_statement: Option<IncomeStatement>,
    /// Balance sheet, when at least one slot resolved
    pub balance_sheet: Option<BalanceSheet>,
    /// Cash-flow statement, when at least one slot resolved
    pub cash_flow_statement: Option<CashFlowStatement>,
    /// Ratios, when at least one is finite
    pub calculated_ratios: Option<RatioSet>,
    /// Revenue growth against the previously processed filing, percent
    pub revenue_growth_yoy_percent: Option<f64>,
    /// Net income growth against the previously processed filing, percent
    pub net_income_growth_yoy_percent: Option<f64>,
    /// Overall health label
    pub financial_health_status: Option<HealthStatus>,
}

impl NormalizedFiling {
    /// Growth figures of this filing.
    pub const fn growth(&self) -> GrowthPair {
        GrowthPair {
            revenue_growth_pct: self.revenue_growth_yoy_percent,
            net_income_growth_pct: self.net_income_growth_yoy_percent,
        }
    }
}

/// Normalized annual filings of one symbol, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Requested symbol
    pub symbol: String,
    /// Filings, newest period end first
    pub filings: Vec<NormalizedFiling>,
}

impl Report {
    /// Most recent filing.
    pub fn latest(&self) -> Option<&NormalizedFiling> {
        self.filings.first()
    }

    /// Number of filings.
    pub const fn len(&self) -> usize {
        self.filings.len()
    }

    /// Whether the report holds no filings.
    pub const fn is_empty(&self) -> bool {
        self.filings.is_empty()
    }
}
