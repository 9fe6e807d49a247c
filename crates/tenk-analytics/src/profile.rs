//! Company profile normalization.

use serde::{Deserialize, Serialize};
use tenk_data::RawCompanyProfile;

/// Normalized company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Ticker symbol
    pub symbol: String,
    /// Company name
    pub name: String,
    /// Listing exchange
    pub exchange: String,
    /// Industry classification
    pub industry: Option<String>,
    /// Company website
    pub website: Option<String>,
    /// Market capitalization, millions
    pub market_capitalization: Option<f64>,
    /// Shares outstanding, millions
    pub shares_outstanding: Option<f64>,
    /// Country of domicile
    pub country: Option<String>,
    /// Reporting currency
    pub currency: Option<String>,
    /// IPO date
    pub ipo_date: Option<String>,
    /// Logo URL
    pub logo_url: Option<String>,
}

impl CompanyProfile {
    /// Normalize a raw profile.
    ///
    /// Returns `None` for the empty payload the upstream sends for unknown
    /// symbols. `symbol` fills in when the payload carries no ticker.
    pub fn from_raw(symbol: &str, raw: &RawCompanyProfile) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        Some(Self {
            symbol: raw.ticker.clone().unwrap_or_else(|| symbol.to_string()),
            name: raw.name.clone().unwrap_or_default(),
            exchange: raw.exchange.clone().unwrap_or_default(),
            industry: raw.finnhub_industry.clone(),
            website: raw.weburl.clone(),
            market_capitalization: raw.market_capitalization,
            shares_outstanding: raw.share_outstanding,
            country: raw.country.clone(),
            currency: raw.currency.clone(),
            ipo_date: raw.ipo.clone(),
            logo_url: raw.logo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw() {
        let raw: RawCompanyProfile = serde_json::from_value(json!({
            "country": "US",
            "currency": "USD",
            "exchange": "NASDAQ NMS - GLOBAL MARKET",
            "ipo": "1980-12-12",
            "marketCapitalization": 2_950_000.5,
            "name": "Apple Inc",
            "shareOutstanding": 15_441.88,
            "ticker": "AAPL",
            "weburl": "https://www.apple.com/",
            "logo": "https://static.finnhub.io/logo/aapl.png",
            "finnhubIndustry": "Technology"
        }))
        .unwrap();

        let profile = CompanyProfile::from_raw("aapl", &raw).unwrap();
        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.industry.as_deref(), Some("Technology"));
        assert_eq!(profile.ipo_date.as_deref(), Some("1980-12-12"));
        assert_eq!(profile.shares_outstanding, Some(15_441.88));
    }

    #[test]
    fn test_empty_payload() {
        assert!(CompanyProfile::from_raw("ZZZZ", &RawCompanyProfile::default()).is_none());
    }

    #[test]
    fn test_missing_ticker_uses_requested_symbol() {
        let raw = RawCompanyProfile {
            name: Some("Acme Corp".to_string()),
            ..RawCompanyProfile::default()
        };
        let profile = CompanyProfile::from_raw("ACME", &raw).unwrap();
        assert_eq!(profile.symbol, "ACME");
        assert_eq!(profile.exchange, "");
    }
}
