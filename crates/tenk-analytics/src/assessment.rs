//! Single-metric qualitative classifiers.
//!
//! These are used for vendor key metrics and are independent of
//! [`assess`](crate::health::assess). NaN inputs classify as `None`.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Valuation label derived from the price/earnings ratio.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationStatus {
    /// P/E below 15
    #[display("Potentially Undervalued")]
    #[serde(rename = "Potentially Undervalued")]
    PotentiallyUndervalued,
    /// P/E between 15 and 25 inclusive
    #[display("Fairly Valued")]
    #[serde(rename = "Fairly Valued")]
    FairlyValued,
    /// P/E above 25
    #[display("Potentially Overvalued")]
    #[serde(rename = "Potentially Overvalued")]
    PotentiallyOvervalued,
}

impl ValuationStatus {
    /// Classify a price/earnings ratio.
    pub fn classify(pe_ratio: Option<f64>) -> Option<Self> {
        let pe = pe_ratio?;
        if pe < 15.0 {
            Some(Self::PotentiallyUndervalued)
        } else if pe <= 25.0 {
            Some(Self::FairlyValued)
        } else if pe > 25.0 {
            Some(Self::PotentiallyOvervalued)
        } else {
            None
        }
    }
}

/// Profitability label derived from the net profit margin.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profitability {
    /// Margin of 20% or more
    High,
    /// Margin from 10% up to 20%
    Moderate,
    /// Margin from 0% up to 10%
    Low,
    /// Negative margin
    Unprofitable,
}

impl Profitability {
    /// Classify a net margin given as a decimal fraction (0.25 for 25%).
    pub fn classify(net_margin: Option<f64>) -> Option<Self> {
        let margin = net_margin?;
        if margin >= 0.20 {
            Some(Self::High)
        } else if margin >= 0.10 {
            Some(Self::Moderate)
        } else if margin >= 0.0 {
            Some(Self::Low)
        } else if margin < 0.0 {
            Some(Self::Unprofitable)
        } else {
            None
        }
    }
}

/// Liquidity label derived from the current ratio.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Liquidity {
    /// Current ratio of 2.0 or more
    Strong,
    /// Current ratio from 1.0 up to 2.0
    Adequate,
    /// Current ratio below 1.0
    Weak,
}

impl Liquidity {
    /// Classify a current ratio.
    pub fn classify(current_ratio: Option<f64>) -> Option<Self> {
        let ratio = current_ratio?;
        if ratio >= 2.0 {
            Some(Self::Strong)
        } else if ratio >= 1.0 {
            Some(Self::Adequate)
        } else if ratio < 1.0 {
            Some(Self::Weak)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(8.0), Some(ValuationStatus::PotentiallyUndervalued))]
    #[case(Some(-3.0), Some(ValuationStatus::PotentiallyUndervalued))]
    #[case(Some(15.0), Some(ValuationStatus::FairlyValued))]
    #[case(Some(25.0), Some(ValuationStatus::FairlyValued))]
    #[case(Some(25.01), Some(ValuationStatus::PotentiallyOvervalued))]
    #[case(None, None)]
    #[case(Some(f64::NAN), None)]
    fn test_valuation(#[case] pe: Option<f64>, #[case] expected: Option<ValuationStatus>) {
        assert_eq!(ValuationStatus::classify(pe), expected);
    }

    #[rstest]
    #[case(Some(0.25), Some(Profitability::High))]
    #[case(Some(0.20), Some(Profitability::High))]
    #[case(Some(0.15), Some(Profitability::Moderate))]
    #[case(Some(0.10), Some(Profitability::Moderate))]
    #[case(Some(0.0), Some(Profitability::Low))]
    #[case(Some(-0.01), Some(Profitability::Unprofitable))]
    #[case(None, None)]
    #[case(Some(f64::NAN), None)]
    fn test_profitability(#[case] margin: Option<f64>, #[case] expected: Option<Profitability>) {
        assert_eq!(Profitability::classify(margin), expected);
    }

    #[rstest]
    #[case(Some(2.0), Some(Liquidity::Strong))]
    #[case(Some(1.99), Some(Liquidity::Adequate))]
    #[case(Some(1.0), Some(Liquidity::Adequate))]
    #[case(Some(0.4), Some(Liquidity::Weak))]
    #[case(Some(f64::INFINITY), Some(Liquidity::Strong))]
    #[case(None, None)]
    #[case(Some(f64::NAN), None)]
    fn test_liquidity(#[case] ratio: Option<f64>, #[case] expected: Option<Liquidity>) {
        assert_eq!(Liquidity::classify(ratio), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            ValuationStatus::PotentiallyOvervalued.to_string(),
            "Potentially Overvalued"
        );
        assert_eq!(Profitability::Unprofitable.to_string(), "Unprofitable");
        assert_eq!(
            serde_json::to_string(&ValuationStatus::FairlyValued).unwrap(),
            "\"Fairly Valued\""
        );
        assert_eq!(serde_json::to_string(&Liquidity::Adequate).unwrap(), "\"Adequate\"");
    }
}
