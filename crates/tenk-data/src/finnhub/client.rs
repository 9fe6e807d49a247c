//! Finnhub REST client.

use super::types::{RawBasicFinancials, RawCompanyProfile, RawReportedFinancials};
use crate::error::{DataError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Finnhub API base URL
pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("tenk/", env!("CARGO_PKG_VERSION"));

/// Reporting frequency for reported financials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PeriodType {
    /// Annual (10-K) filings
    #[default]
    Annual,
    /// Quarterly (10-Q) filings
    Quarterly,
}

impl PeriodType {
    /// Value of the `freq` query parameter.
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }

    /// Map a form type to its reporting frequency.
    pub fn from_form(form: &str) -> Option<Self> {
        match form {
            "10-K" => Some(Self::Annual),
            "10-Q" => Some(Self::Quarterly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Source of raw upstream payloads.
///
/// [`FinnhubClient`] is the production implementation. Tests substitute
/// their own.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Fetch `/stock/profile2` for a symbol.
    async fn company_profile(&self, symbol: &str) -> Result<RawCompanyProfile>;

    /// Fetch `/stock/metric` for a symbol and metric group.
    async fn basic_financials(&self, symbol: &str, metric: &str) -> Result<RawBasicFinancials>;

    /// Fetch `/stock/financials-reported` for a symbol.
    async fn financials_reported(
        &self,
        symbol: &str,
        period: PeriodType,
    ) -> Result<RawReportedFinancials>;
}

/// Finnhub API client.
///
/// One request per call, no retries. The API key travels as the `token`
/// query parameter and is never logged.
pub struct FinnhubClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FinnhubClient {
    /// Create a client against the public Finnhub endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, FINNHUB_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and timeout.
    ///
    /// # Errors
    /// Returns [`DataError::MissingApiKey`] when the key is empty and
    /// [`DataError::InvalidConfig`] when the base URL is empty.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DataError::MissingApiKey);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DataError::InvalidConfig("empty Finnhub base URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, ?query, "Finnhub request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status, "Finnhub request failed");
            return Err(classify_failure(status, body, retry_after));
        }

        let bytes = response.bytes().await.map_err(DataError::Network)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DataError::Parse(format!("Failed to parse {path} response: {e}")))
    }
}

/// Map a non-success response to a [`DataError`].
pub(crate) fn classify_failure(status: u16, body: String, retry_after_secs: Option<u64>) -> DataError {
    match status {
        400 if body.contains("Invalid symbol") => DataError::InvalidSymbol(body),
        429 => DataError::RateLimited { retry_after_secs },
        _ => DataError::Http { status, body },
    }
}

#[async_trait]
impl UpstreamSource for FinnhubClient {
    async fn company_profile(&self, symbol: &str) -> Result<RawCompanyProfile> {
        self.get_json("/stock/profile2", &[("symbol", symbol)]).await
    }

    async fn basic_financials(&self, symbol: &str, metric: &str) -> Result<RawBasicFinancials> {
        self.get_json("/stock/metric", &[("symbol", symbol), ("metric", metric)])
            .await
    }

    async fn financials_reported(
        &self,
        symbol: &str,
        period: PeriodType,
    ) -> Result<RawReportedFinancials> {
        self.get_json(
            "/stock/financials-reported",
            &[("symbol", symbol), ("freq", period.as_query())],
        )
        .await
    }
}

impl std::fmt::Debug for FinnhubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinnhubClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
