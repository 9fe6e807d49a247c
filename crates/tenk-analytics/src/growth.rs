//! Period-over-period growth.

use crate::round_to;
use serde::{Deserialize, Serialize};

/// Year-over-year growth in percent, rounded to 2 decimal places.
///
/// A zero base gives `+inf` for a positive current value, `-inf` for a
/// negative one and `0.0` when both are zero. Either operand missing gives
/// `None`.
pub fn yoy_growth(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let (current, previous) = (current?, previous?);
    if previous == 0.0 {
        return Some(if current > 0.0 {
            f64::INFINITY
        } else if current < 0.0 {
            f64::NEG_INFINITY
        } else {
            0.0
        });
    }
    Some(round_to((current - previous) / previous * 100.0, 2))
}

/// Revenue and net income growth of one filing against the carried period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthPair {
    /// Revenue growth, percent
    pub revenue_growth_pct: Option<f64>,
    /// Net income growth, percent
    pub net_income_growth_pct: Option<f64>,
}

/// Values carried from one filing to the next while walking newest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriorPeriod {
    /// Revenue of the carried period
    pub revenue: Option<f64>,
    /// Income-statement net income of the carried period
    pub net_income: Option<f64>,
}

impl PriorPeriod {
    /// Growth of `self` measured against `previous`.
    pub fn growth_over(&self, previous: &Self) -> GrowthPair {
        GrowthPair {
            revenue_growth_pct: yoy_growth(self.revenue, previous.revenue),
            net_income_growth_pct: yoy_growth(self.net_income, previous.net_income),
        }
    }
}
