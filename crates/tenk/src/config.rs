//! Runtime configuration.
//!
//! Settings come from the process environment, after loading a `.env` file
//! from the working directory when one exists.

use std::time::Duration;
use tenk_data::cache::DEFAULT_TTL;
use tenk_data::finnhub::{DEFAULT_TIMEOUT, FINNHUB_BASE_URL};
use tenk_data::{DataError, Result};

/// Environment variable holding the Finnhub API key.
pub const API_KEY_VAR: &str = "FINNHUB_API_KEY";

/// Environment variable overriding the Finnhub base URL.
pub const BASE_URL_VAR: &str = "FINNHUB_BASE_URL";

/// Environment variable overriding the cache TTL, in seconds.
pub const CACHE_TTL_VAR: &str = "TENK_CACHE_TTL_SECS";

/// Environment variable overriding the HTTP timeout, in seconds.
pub const HTTP_TIMEOUT_VAR: &str = "TENK_HTTP_TIMEOUT_SECS";

/// Service settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Finnhub API key
    pub api_key: String,
    /// Finnhub base URL
    pub base_url: String,
    /// Freshness window of cached payloads
    pub cache_ttl: Duration,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("cache_ttl", &self.cache_ttl)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Settings {
    /// Settings with the given key and every other value at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: FINNHUB_BASE_URL.to_string(),
            cache_ttl: DEFAULT_TTL,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read settings from the environment, loading `.env` first.
    ///
    /// # Errors
    /// Returns [`DataError::MissingApiKey`] when no non-empty key is set and
    /// [`DataError::InvalidConfig`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(DataError::MissingApiKey)?;
        let mut settings = Self::new(api_key);

        if let Some(base_url) = get(BASE_URL_VAR) {
            settings.base_url = base_url;
        }
        if let Some(raw) = get(CACHE_TTL_VAR) {
            settings.cache_ttl = parse_secs(CACHE_TTL_VAR, &raw)?;
        }
        if let Some(raw) = get(HTTP_TIMEOUT_VAR) {
            settings.request_timeout = parse_secs(HTTP_TIMEOUT_VAR, &raw)?;
        }

        Ok(settings)
    }

    /// Replace the cache TTL.
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

fn parse_secs(name: &str, raw: &str) -> Result<Duration> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| DataError::InvalidConfig(format!("{name}={raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_VAR, "abc123")])).unwrap();
        assert_eq!(settings.api_key, "abc123");
        assert_eq!(settings.base_url, FINNHUB_BASE_URL);
        assert_eq!(settings.cache_ttl, Duration::from_secs(300));
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://localhost:8080"),
            (CACHE_TTL_VAR, "60"),
            (HTTP_TIMEOUT_VAR, " 5 "),
        ]))
        .unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.cache_ttl, Duration::from_secs(60));
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_or_blank_key() {
        assert!(matches!(
            Settings::from_lookup(lookup(&[])),
            Err(DataError::MissingApiKey)
        ));
        assert!(matches!(
            Settings::from_lookup(lookup(&[(API_KEY_VAR, "   ")])),
            Err(DataError::MissingApiKey)
        ));
    }

    #[rstest]
    #[case(CACHE_TTL_VAR, "soon")]
    #[case(CACHE_TTL_VAR, "-5")]
    #[case(HTTP_TIMEOUT_VAR, "1.5")]
    fn test_bad_number(#[case] name: &str, #[case] raw: &str) {
        let err = Settings::from_lookup(lookup(&[(API_KEY_VAR, "k"), (name, raw)])).unwrap_err();
        assert!(matches!(err, DataError::InvalidConfig(_)));
        assert!(err.to_string().contains(name));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", Settings::new("secret-key"));
        assert!(!debug.contains("secret-key"));
    }
}
