//! Vendor key-metric normalization.

use crate::assessment::{Liquidity, Profitability, ValuationStatus};
use serde::{Deserialize, Serialize};
use tenk_data::{RawBasicFinancials, RawMetricBundle};

const QUICK_RATIO_QUARTERLY: &str = "quickRatioQuarterly";

/// Normalized key metrics with qualitative assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Ticker symbol
    pub symbol: String,

    // Valuation
    /// Price/earnings, TTM
    pub pe_ratio_ttm: Option<f64>,
    /// Price/sales, TTM
    pub ps_ratio_ttm: Option<f64>,
    /// Price/book
    pub pb_ratio: Option<f64>,
    /// Market capitalization, millions
    pub market_capitalization: Option<f64>,

    // Profitability
    /// Earnings per share, TTM
    pub eps_ttm: Option<f64>,
    /// Return on equity, TTM
    pub roe_ttm: Option<f64>,
    /// Return on assets, TTM
    pub roa_ttm: Option<f64>,
    /// Net profit margin, TTM
    pub net_profit_margin_ttm: Option<f64>,
    /// Gross margin, TTM
    pub gross_margin_ttm: Option<f64>,
    /// Operating margin, TTM
    pub operating_margin_ttm: Option<f64>,

    // Liquidity and solvency
    /// Current ratio, latest annual
    pub current_ratio_annual: Option<f64>,
    /// Quick ratio, latest annual (quarterly when no annual figure exists)
    pub quick_ratio_annual: Option<f64>,
    /// Total debt / total equity, latest annual
    pub total_debt_to_equity_annual: Option<f64>,

    // Growth
    /// Revenue growth year over year, TTM, percent
    pub revenue_growth_ttm_yoy: Option<f64>,
    /// EPS growth year over year, TTM, percent
    pub eps_growth_ttm_yoy: Option<f64>,

    // Dividend
    /// Dividend per share, TTM
    pub dividend_per_share_ttm: Option<f64>,
    /// Current dividend yield, TTM
    pub current_dividend_yield_ttm: Option<f64>,

    // Price
    /// Beta against the market
    pub beta: Option<f64>,
    /// 52-week high price
    #[serde(rename = "52_week_high")]
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low price
    #[serde(rename = "52_week_low")]
    pub fifty_two_week_low: Option<f64>,

    // Cash flow
    /// Cash flow per share, TTM
    pub cash_flow_per_share_ttm: Option<f64>,

    // Assessments
    /// Valuation label from the P/E ratio
    pub valuation_status: Option<ValuationStatus>,
    /// Profitability label from the net margin
    pub profitability_assessment: Option<Profitability>,
    /// Liquidity label from the current ratio
    pub liquidity_assessment: Option<Liquidity>,
}

fn percent(fraction: Option<f64>) -> Option<f64> {
    fraction.map(|f| f * 100.0)
}

impl KeyMetrics {
    /// Normalize a raw metric response.
    ///
    /// Returns `None` when the bundle is absent or carries no data.
    /// `symbol` fills in when the response carries none.
    pub fn from_raw(symbol: &str, raw: &RawBasicFinancials) -> Option<Self> {
        let metric = raw.metric.as_ref().filter(|m| !m.is_empty())?;
        let symbol = raw.symbol.clone().unwrap_or_else(|| symbol.to_string());
        Some(Self::from_bundle(symbol, metric))
    }

    fn from_bundle(symbol: String, m: &RawMetricBundle) -> Self {
        Self {
            symbol,
            pe_ratio_ttm: m.pe_ttm,
            ps_ratio_ttm: m.ps_ttm,
            pb_ratio: m.pb,
            market_capitalization: m.market_capitalization,
            eps_ttm: m.eps_ttm,
            roe_ttm: m.roe_ttm,
            roa_ttm: m.roa_ttm,
            net_profit_margin_ttm: m.net_profit_margin_ttm,
            gross_margin_ttm: m.gross_margin_ttm,
            operating_margin_ttm: m.operating_margin_ttm,
            current_ratio_annual: m.current_ratio_annual,
            quick_ratio_annual: m
                .quick_ratio_annual
                .or_else(|| m.extra_f64(QUICK_RATIO_QUARTERLY)),
            total_debt_to_equity_annual: m.total_debt_to_equity_annual,
            revenue_growth_ttm_yoy: percent(m.revenue_growth_ttm_yoy),
            eps_growth_ttm_yoy: percent(m.eps_growth_ttm_yoy),
            dividend_per_share_ttm: m.dividend_per_share_ttm,
            current_dividend_yield_ttm: m.current_dividend_yield_ttm,
            beta: m.beta,
            fifty_two_week_high: m.fifty_two_week_high,
            fifty_two_week_low: m.fifty_two_week_low,
            cash_flow_per_share_ttm: m.cash_flow_per_share_ttm,
            valuation_status: ValuationStatus::classify(m.pe_ttm),
            profitability_assessment: Profitability::classify(m.net_profit_margin_ttm),
            liquidity_assessment: Liquidity::classify(m.current_ratio_annual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn raw(metric: serde_json::Value) -> RawBasicFinancials {
        serde_json::from_value(json!({
            "metricType": "all",
            "symbol": "MSFT",
            "metric": metric,
        }))
        .unwrap()
    }

    #[test]
    fn test_from_raw() {
        let raw = raw(json!({
            "peTTM": 35.2,
            "netProfitMarginTTM": 0.36,
            "currentRatioAnnual": 1.27,
            "revenueGrowthTTMYoy": 0.153,
            "epsGrowthTTMYoy": -0.02,
            "52WeekHigh": 468.35,
            "beta": 0.9
        }));

        let metrics = KeyMetrics::from_raw("msft", &raw).unwrap();
        assert_eq!(metrics.symbol, "MSFT");
        assert_relative_eq!(metrics.revenue_growth_ttm_yoy.unwrap(), 15.3, epsilon = 1e-9);
        assert_relative_eq!(metrics.eps_growth_ttm_yoy.unwrap(), -2.0, epsilon = 1e-9);
        assert_eq!(metrics.fifty_two_week_high, Some(468.35));
        assert_eq!(metrics.valuation_status, Some(ValuationStatus::PotentiallyOvervalued));
        assert_eq!(metrics.profitability_assessment, Some(Profitability::High));
        assert_eq!(metrics.liquidity_assessment, Some(Liquidity::Adequate));
        assert_eq!(metrics.pb_ratio, None);
    }

    #[test]
    fn test_quick_ratio_fallback() {
        let quarterly = raw(json!({"quickRatioQuarterly": 0.85}));
        let metrics = KeyMetrics::from_raw("MSFT", &quarterly).unwrap();
        assert_eq!(metrics.quick_ratio_annual, Some(0.85));

        let both = raw(json!({"quickRatioAnnual": 1.1, "quickRatioQuarterly": 0.85}));
        let metrics = KeyMetrics::from_raw("MSFT", &both).unwrap();
        assert_eq!(metrics.quick_ratio_annual, Some(1.1));
    }

    #[test]
    fn test_absent_or_empty_bundle() {
        let empty = raw(json!({}));
        assert!(KeyMetrics::from_raw("ZZZZ", &empty).is_none());
        assert!(KeyMetrics::from_raw("ZZZZ", &RawBasicFinancials::default()).is_none());
    }

    #[test]
    fn test_serialized_names() {
        let metrics = KeyMetrics::from_raw("MSFT", &raw(json!({"52WeekLow": 309.45}))).unwrap();
        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["52_week_low"], json!(309.45));
        assert_eq!(value["valuation_status"], json!(null));
    }
}
