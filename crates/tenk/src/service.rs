//! Cached fetch-and-normalize orchestration.

use crate::config::Settings;
use crate::error::ServiceError;
use std::sync::Arc;
use tenk_analytics::{CompanyProfile, KeyMetrics, Report, ReportAssembler};
use tenk_data::cache::CacheStats;
use tenk_data::{
    CacheConfig, CacheKey, DataError, FinnhubClient, PeriodType, RawBasicFinancials,
    RawCompanyProfile, RawReportedFinancials, UpstreamCache, UpstreamSource,
};

/// Metric group requested from `/stock/metric`.
const METRIC_GROUP: &str = "all";

/// Fetches raw payloads through an [`UpstreamSource`], caches them and
/// normalizes them.
///
/// Each payload kind has its own cache; all share one [`CacheConfig`].
/// Symbols are passed to the upstream and into cache keys as given.
pub struct FinancialsService<S> {
    source: S,
    profiles: UpstreamCache<Arc<RawCompanyProfile>>,
    metrics: UpstreamCache<Arc<RawBasicFinancials>>,
    filings: UpstreamCache<Arc<RawReportedFinancials>>,
    assembler: ReportAssembler,
}

impl<S> std::fmt::Debug for FinancialsService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialsService")
            .field("profiles", &self.profiles)
            .field("metrics", &self.metrics)
            .field("filings", &self.filings)
            .finish_non_exhaustive()
    }
}

impl FinancialsService<FinnhubClient> {
    /// Service backed by a [`FinnhubClient`] built from `settings`.
    ///
    /// # Errors
    /// Returns the client construction error, e.g. a missing API key.
    pub fn from_settings(settings: &Settings) -> Result<Self, DataError> {
        let client = FinnhubClient::with_options(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.request_timeout,
        )?;
        Ok(Self::with_cache_config(
            client,
            CacheConfig::with_ttl(settings.cache_ttl),
        ))
    }
}

impl<S: UpstreamSource> FinancialsService<S> {
    /// Service with the default cache configuration.
    pub fn new(source: S) -> Self {
        Self::with_cache_config(source, CacheConfig::default())
    }

    /// Service with a custom cache configuration.
    pub fn with_cache_config(source: S, config: CacheConfig) -> Self {
        Self {
            source,
            profiles: UpstreamCache::with_config(config.clone()),
            metrics: UpstreamCache::with_config(config.clone()),
            filings: UpstreamCache::with_config(config),
            assembler: ReportAssembler::new(),
        }
    }

    /// Underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Normalized company profile.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] for an unknown symbol, otherwise
    /// [`ServiceError::Upstream`].
    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, ServiceError> {
        let key = CacheKey::new("company_profile", symbol);
        let raw = self
            .profiles
            .get_or_fetch_async(&key, || async move {
                self.source.company_profile(symbol).await.map(Arc::new)
            })
            .await
            .map_err(|e| ServiceError::from_upstream(symbol, e))?;

        CompanyProfile::from_raw(symbol, &raw).ok_or_else(|| {
            ServiceError::not_found(symbol, format!("Company profile not found for {symbol}."))
        })
    }

    /// Normalized key metrics with qualitative assessments.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] when the upstream has no metrics for the
    /// symbol, otherwise [`ServiceError::Upstream`].
    pub async fn key_metrics(&self, symbol: &str) -> Result<KeyMetrics, ServiceError> {
        let key = CacheKey::new("basic_financials", symbol).param("metric", METRIC_GROUP);
        let raw = self
            .metrics
            .get_or_fetch_async(&key, || async move {
                self.source
                    .basic_financials(symbol, METRIC_GROUP)
                    .await
                    .map(Arc::new)
            })
            .await
            .map_err(|e| ServiceError::from_upstream(symbol, e))?;

        KeyMetrics::from_raw(symbol, &raw).ok_or_else(|| {
            ServiceError::not_found(symbol, format!("Key metrics not found for {symbol}."))
        })
    }

    /// Annual financial report, newest filing first.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] when no filings exist,
    /// [`ServiceError::NoAnnualFilings`] when none is a 10-K, otherwise
    /// [`ServiceError::Upstream`].
    pub async fn financial_report(&self, symbol: &str) -> Result<Report, ServiceError> {
        let period = PeriodType::Annual;
        let key = CacheKey::new("financials_reported", symbol).param("type", period);
        let raw = self
            .filings
            .get_or_fetch_async(&key, || async move {
                self.source
                    .financials_reported(symbol, period)
                    .await
                    .map(Arc::new)
            })
            .await
            .map_err(|e| ServiceError::from_upstream(symbol, e))?;

        self.assembler
            .assemble(symbol, &raw)
            .map_err(|e| ServiceError::from_selection(symbol, e))
    }

    /// Cache statistics for profiles, metrics and filings, in that order.
    pub fn cache_stats(&self) -> [CacheStats; 3] {
        [
            self.profiles.stats(),
            self.metrics.stats(),
            self.filings.stats(),
        ]
    }

    /// Drop every cached payload.
    pub fn clear_cache(&self) {
        self.profiles.clear();
        self.metrics.clear();
        self.filings.clear();
    }
}
