//! Overall financial health scoring.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Qualitative health label of a filing.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Score of 2 or more
    Strong,
    /// Score of 0 or 1
    Stable,
    /// Negative score
    Concerning,
}

/// Score a filing from its income, cash flow and balance-sheet ratios.
///
/// Each usable input counts as one considered factor:
///
/// | input           | +1       | -1      |
/// |-----------------|----------|---------|
/// | net income      | `> 0`    |         |
/// | operating cash  | `> 0`    |         |
/// | current ratio   | `>= 1.5` | `< 1.0` |
/// | debt-to-equity  | `<= 1.0` | `> 2.0` |
///
/// Ratios are usable only when finite. The label is [`HealthStatus::Strong`]
/// for a score of at least 2, [`HealthStatus::Stable`] for at least 0 and
/// [`HealthStatus::Concerning`] otherwise. `None` when no factor is usable.
pub fn assess(
    net_income: Option<f64>,
    cash_from_operations: Option<f64>,
    current_ratio: Option<f64>,
    debt_to_equity: Option<f64>,
) -> Option<HealthStatus> {
    let mut score = 0_i32;
    let mut considered = 0_u32;

    if let Some(net_income) = net_income {
        considered += 1;
        if net_income > 0.0 {
            score += 1;
        }
    }

    if let Some(cash) = cash_from_operations {
        considered += 1;
        if cash > 0.0 {
            score += 1;
        }
    }

    if let Some(ratio) = current_ratio.filter(|r| r.is_finite()) {
        considered += 1;
        if ratio >= 1.5 {
            score += 1;
        } else if ratio < 1.0 {
            score -= 1;
        }
    }

    if let Some(ratio) = debt_to_equity.filter(|r| r.is_finite()) {
        considered += 1;
        if ratio <= 1.0 {
            score += 1;
        } else if ratio > 2.0 {
            score -= 1;
        }
    }

    if considered == 0 {
        return None;
    }

    Some(match score {
        2.. => HealthStatus::Strong,
        0..=1 => HealthStatus::Stable,
        _ => HealthStatus::Concerning,
    })
}
