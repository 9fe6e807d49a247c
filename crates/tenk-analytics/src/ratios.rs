//! Financial ratios computed from resolved line items.
//!
//! Policy for every ratio:
//! - a missing operand gives `None`;
//! - a zero denominator with a present numerator gives `+inf`, whatever the
//!   numerator's sign;
//! - otherwise the quotient is rounded (4 places for margins, 2 for the
//!   current ratio and debt-to-equity).

use crate::round_to;
use crate::statements::{BalanceSheet, IncomeStatement, NormalizedItem};
use serde::{Deserialize, Serialize};

const MARGIN_PLACES: usize = 4;
const BALANCE_PLACES: usize = 2;

/// Operands of the ratio computations for one filing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioInputs {
    /// Revenue
    pub revenue: Option<f64>,
    /// Gross profit
    pub gross_profit: Option<f64>,
    /// Operating income
    pub operating_income: Option<f64>,
    /// Net income from the income statement
    pub net_income: Option<f64>,
    /// Total current assets
    pub total_current_assets: Option<f64>,
    /// Total current liabilities
    pub total_current_liabilities: Option<f64>,
    /// Total liabilities
    pub total_liabilities: Option<f64>,
    /// Total equity
    pub total_equity: Option<f64>,
}

impl RatioInputs {
    /// Gather operands from resolved statements.
    pub fn from_statements(income: &IncomeStatement, balance: &BalanceSheet) -> Self {
        let value = |item: &Option<NormalizedItem>| item.as_ref().and_then(|i| i.value);
        Self {
            revenue: value(&income.revenue),
            gross_profit: value(&income.gross_profit),
            operating_income: value(&income.operating_income),
            net_income: value(&income.net_income),
            total_current_assets: value(&balance.total_current_assets),
            total_current_liabilities: value(&balance.total_current_liabilities),
            total_liabilities: value(&balance.total_liabilities),
            total_equity: value(&balance.total_equity),
        }
    }
}

/// Computed ratios for one filing.
///
/// Infinite and NaN values are kept for direct callers; they do not count
/// towards [`is_meaningful`](Self::is_meaningful).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Gross profit / revenue
    pub gross_margin: Option<f64>,
    /// Operating income / revenue
    pub operating_margin: Option<f64>,
    /// Net income / revenue
    pub net_profit_margin: Option<f64>,
    /// Current assets / current liabilities
    pub current_ratio: Option<f64>,
    /// Total liabilities / total equity
    pub debt_to_equity_ratio: Option<f64>,
}

impl RatioSet {
    /// All ratios in declaration order.
    pub const fn values(&self) -> [Option<f64>; 5] {
        [
            self.gross_margin,
            self.operating_margin,
            self.net_profit_margin,
            self.current_ratio,
            self.debt_to_equity_ratio,
        ]
    }

    /// Whether at least one ratio is present and finite.
    pub fn is_meaningful(&self) -> bool {
        self.values().iter().any(|v| v.is_some_and(f64::is_finite))
    }
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>, places: usize) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return Some(f64::INFINITY);
    }
    Some(round_to(numerator / denominator, places))
}

/// Compute every ratio of a [`RatioSet`].
pub fn compute_ratios(inputs: &RatioInputs) -> RatioSet {
    RatioSet {
        gross_margin: ratio(inputs.gross_profit, inputs.revenue, MARGIN_PLACES),
        operating_margin: ratio(inputs.operating_income, inputs.revenue, MARGIN_PLACES),
        net_profit_margin: ratio(inputs.net_income, inputs.revenue, MARGIN_PLACES),
        current_ratio: ratio(
            inputs.total_current_assets,
            inputs.total_current_liabilities,
            BALANCE_PLACES,
        ),
        debt_to_equity_ratio: ratio(inputs.total_liabilities, inputs.total_equity, BALANCE_PLACES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn inputs() -> RatioInputs {
        RatioInputs {
            revenue: Some(1_000.0),
            gross_profit: Some(400.0),
            operating_income: Some(250.0),
            net_income: Some(123.456),
            total_current_assets: Some(300.0),
            total_current_liabilities: Some(180.0),
            total_liabilities: Some(500.0),
            total_equity: Some(700.0),
        }
    }

    #[test]
    fn test_standard_ratios() {
        let ratios = compute_ratios(&inputs());

        assert_relative_eq!(ratios.gross_margin.unwrap(), 0.4);
        assert_relative_eq!(ratios.operating_margin.unwrap(), 0.25);
        assert_relative_eq!(ratios.net_profit_margin.unwrap(), 0.1235);
        assert_relative_eq!(ratios.current_ratio.unwrap(), 1.67);
        assert_relative_eq!(ratios.debt_to_equity_ratio.unwrap(), 0.71);
        assert!(ratios.is_meaningful());
    }

    #[rstest]
    #[case(Some(100.0), Some(0.0), Some(f64::INFINITY))]
    #[case(Some(-100.0), Some(0.0), Some(f64::INFINITY))]
    #[case(Some(0.0), Some(0.0), Some(f64::INFINITY))]
    #[case(None, Some(50.0), None)]
    #[case(Some(100.0), None, None)]
    #[case(None, None, None)]
    #[case(Some(100.0), Some(-50.0), Some(-2.0))]
    #[case(Some(97_639.0), Some(40.0), Some(2440.97))]
    fn test_current_ratio_policy(
        #[case] assets: Option<f64>,
        #[case] liabilities: Option<f64>,
        #[case] expected: Option<f64>,
    ) {
        let ratios = compute_ratios(&RatioInputs {
            total_current_assets: assets,
            total_current_liabilities: liabilities,
            ..RatioInputs::default()
        });
        assert_eq!(ratios.current_ratio, expected);
    }

    #[test]
    fn test_zero_revenue_margins_are_unbounded() {
        let ratios = compute_ratios(&RatioInputs {
            revenue: Some(0.0),
            ..inputs()
        });

        assert_eq!(ratios.gross_margin, Some(f64::INFINITY));
        assert_eq!(ratios.operating_margin, Some(f64::INFINITY));
        assert_eq!(ratios.net_profit_margin, Some(f64::INFINITY));
        // Balance-sheet ratios still finite
        assert!(ratios.is_meaningful());
    }

    #[test]
    fn test_nan_denominator_never_panics() {
        let ratios = compute_ratios(&RatioInputs {
            total_equity: Some(f64::NAN),
            total_liabilities: Some(10.0),
            ..RatioInputs::default()
        });

        assert!(ratios.debt_to_equity_ratio.unwrap().is_nan());
        assert!(!ratios.is_meaningful());
    }

    #[test]
    fn test_only_infinite_ratios_are_not_meaningful() {
        let ratios = compute_ratios(&RatioInputs {
            total_current_assets: Some(100.0),
            total_current_liabilities: Some(0.0),
            ..RatioInputs::default()
        });

        assert_eq!(ratios.current_ratio, Some(f64::INFINITY));
        assert!(!ratios.is_meaningful());
        assert!(!RatioSet::default().is_meaningful());
    }
}
