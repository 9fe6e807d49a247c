//! Raw payload shapes returned by the Finnhub API.
//!
//! Every field tolerates absence. Unknown fields are ignored, except on
//! [`RawMetricBundle`] where they are kept in an explicit bag.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Read an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One disclosed fact inside a statement section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConceptItem {
    /// Concept identifier, e.g. `us-gaap_Revenues`; empty when missing
    #[serde(default, deserialize_with = "null_as_default")]
    pub concept: String,
    /// Human-readable label chosen by the filer
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// Raw value exactly as delivered; usually a number, occasionally text or null
    #[serde(default)]
    pub value: Value,
    /// Unit of measure, e.g. `usd`
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

impl RawConceptItem {
    /// Create an item carrying a numeric value.
    pub fn new(
        concept: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            concept: concept.into(),
            label: label.into(),
            value: serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number),
            unit: unit.into(),
        }
    }

    /// Create an item with an arbitrary raw value.
    pub fn with_raw_value(
        concept: impl Into<String>,
        label: impl Into<String>,
        value: Value,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            concept: concept.into(),
            label: label.into(),
            value,
            unit: unit.into(),
        }
    }

    /// The value as a float, or `None` when it is missing or not numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

/// The three statement sections of one filing, each an ordered item list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatementSections {
    /// Balance sheet
    #[serde(default)]
    pub bs: Option<Vec<RawConceptItem>>,
    /// Income statement
    #[serde(default)]
    pub ic: Option<Vec<RawConceptItem>>,
    /// Cash-flow statement
    #[serde(default)]
    pub cf: Option<Vec<RawConceptItem>>,
}

/// One disclosed filing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilingRecord {
    /// SEC accession number
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_number: String,
    /// Ticker symbol
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Central Index Key
    #[serde(default, deserialize_with = "null_as_default")]
    pub cik: String,
    /// Fiscal year
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    /// Fiscal quarter, 0 for annual filings
    #[serde(default, deserialize_with = "null_as_default")]
    pub quarter: i32,
    /// Form type, e.g. `10-K`
    #[serde(default, deserialize_with = "null_as_default")]
    pub form: String,
    /// Period start, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub start_date: Option<String>,
    /// Period end, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub end_date: Option<String>,
    /// Date filed with the SEC
    #[serde(default)]
    pub filed_date: Option<String>,
    /// Date accepted by the SEC
    #[serde(default)]
    pub accepted_date: Option<String>,
    /// Statement sections; `None` when the payload carried no report
    #[serde(default, rename = "report")]
    pub sections: Option<RawStatementSections>,
}

/// Response of `/stock/financials-reported`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReportedFinancials {
    /// Central Index Key
    #[serde(default)]
    pub cik: Option<String>,
    /// Ticker symbol for the whole bundle
    #[serde(default)]
    pub symbol: Option<String>,
    /// Filings; `None` when the field was absent
    #[serde(default)]
    pub data: Option<Vec<RawFilingRecord>>,
}

/// Response of `/stock/profile2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompanyProfile {
    /// Country of domicile
    #[serde(default)]
    pub country: Option<String>,
    /// Reporting currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Listing exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// IPO date
    #[serde(default)]
    pub ipo: Option<String>,
    /// Market capitalization, millions
    #[serde(default)]
    pub market_capitalization: Option<f64>,
    /// Company name
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Shares outstanding, millions
    #[serde(default)]
    pub share_outstanding: Option<f64>,
    /// Ticker symbol
    #[serde(default)]
    pub ticker: Option<String>,
    /// Company website
    #[serde(default)]
    pub weburl: Option<String>,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
    /// Industry classification
    #[serde(default)]
    pub finnhub_industry: Option<String>,
}

impl RawCompanyProfile {
    /// The provider answers `{}` for symbols it does not know.
    pub const fn is_empty(&self) -> bool {
        self.ticker.is_none() && self.name.is_none()
    }
}

/// Response of `/stock/metric`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBasicFinancials {
    /// Metric bundle
    #[serde(default)]
    pub metric: Option<RawMetricBundle>,
    /// Metric type requested, usually `all`
    #[serde(default, rename = "metricType")]
    pub metric_type: Option<String>,
    /// Ticker symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Historical series; carried through untouched
    #[serde(default)]
    pub series: Option<Value>,
}

/// Pre-computed vendor metrics.
///
/// Only the fields the analytics layer reads are typed. Everything else the
/// provider sends lands in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetricBundle {
    /// Price/earnings, trailing twelve months
    #[serde(default, rename = "peTTM")]
    pub pe_ttm: Option<f64>,
    /// Price/sales, trailing twelve months
    #[serde(default, rename = "psTTM")]
    pub ps_ttm: Option<f64>,
    /// Price/book
    #[serde(default)]
    pub pb: Option<f64>,
    /// Earnings per share, trailing twelve months
    #[serde(default, rename = "epsTTM")]
    pub eps_ttm: Option<f64>,
    /// Return on equity, trailing twelve months
    #[serde(default, rename = "roeTTM")]
    pub roe_ttm: Option<f64>,
    /// Return on assets, trailing twelve months
    #[serde(default, rename = "roaTTM")]
    pub roa_ttm: Option<f64>,
    /// Net profit margin, trailing twelve months
    #[serde(default, rename = "netProfitMarginTTM")]
    pub net_profit_margin_ttm: Option<f64>,
    /// Gross margin, trailing twelve months
    #[serde(default, rename = "grossMarginTTM")]
    pub gross_margin_ttm: Option<f64>,
    /// Operating margin, trailing twelve months
    #[serde(default, rename = "operatingMarginTTM")]
    pub operating_margin_ttm: Option<f64>,
    /// Current ratio, latest annual
    #[serde(default, rename = "currentRatioAnnual")]
    pub current_ratio_annual: Option<f64>,
    /// Quick ratio, latest annual
    #[serde(default, rename = "quickRatioAnnual")]
    pub quick_ratio_annual: Option<f64>,
    /// Total debt / total equity, latest annual
    #[serde(
        default,
        rename = "totalDebt/totalEquityAnnual",
        alias = "totalDebt_totalEquityAnnual"
    )]
    pub total_debt_to_equity_annual: Option<f64>,
    /// Revenue growth year over year, trailing twelve months, as a fraction
    #[serde(default, rename = "revenueGrowthTTMYoy")]
    pub revenue_growth_ttm_yoy: Option<f64>,
    /// EPS growth year over year, trailing twelve months, as a fraction
    #[serde(default, rename = "epsGrowthTTMYoy")]
    pub eps_growth_ttm_yoy: Option<f64>,
    /// Dividend per share, trailing twelve months
    #[serde(default, rename = "dividendPerShareTTM")]
    pub dividend_per_share_ttm: Option<f64>,
    /// Current dividend yield, trailing twelve months
    #[serde(default, rename = "currentDividendYieldTTM")]
    pub current_dividend_yield_ttm: Option<f64>,
    /// Beta against the market
    #[serde(default)]
    pub beta: Option<f64>,
    /// Market capitalization, millions
    #[serde(default, rename = "marketCapitalization")]
    pub market_capitalization: Option<f64>,
    /// 52-week high price
    #[serde(default, rename = "52WeekHigh", alias = "fifty_two_week_high")]
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low price
    #[serde(default, rename = "52WeekLow", alias = "fifty_two_week_low")]
    pub fifty_two_week_low: Option<f64>,
    /// Cash flow per share, trailing twelve months
    #[serde(default, rename = "cashFlowPerShareTTM")]
    pub cash_flow_per_share_ttm: Option<f64>,
    /// Fields the provider sent that are not modelled above
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawMetricBundle {
    /// Numeric value of an unmodelled field.
    pub fn extra_f64(&self, name: &str) -> Option<f64> {
        self.extra.get(name).and_then(Value::as_f64)
    }

    /// Whether the bundle carries no data at all.
    pub fn is_empty(&self) -> bool {
        let known = [
            self.pe_ttm,
            self.ps_ttm,
            self.pb,
            self.eps_ttm,
            self.roe_ttm,
            self.roa_ttm,
            self.net_profit_margin_ttm,
            self.gross_margin_ttm,
            self.operating_margin_ttm,
            self.current_ratio_annual,
            self.quick_ratio_annual,
            self.total_debt_to_equity_annual,
            self.revenue_growth_ttm_yoy,
            self.eps_growth_ttm_yoy,
            self.dividend_per_share_ttm,
            self.current_dividend_yield_ttm,
            self.beta,
            self.market_capitalization,
            self.fifty_two_week_high,
            self.fifty_two_week_low,
            self.cash_flow_per_share_ttm,
        ];
        known.iter().all(Option::is_none) && self.extra.is_empty()
    }
}
