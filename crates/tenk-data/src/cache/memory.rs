//! In-process get-or-fetch cache with a fixed freshness window.
//!
//! Entries are never evicted by a background task. Staleness is checked when
//! an entry is read: a stale entry is treated as absent, refetched, and then
//! overwritten. A failed fetch never writes an entry.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Default freshness window for cached upstream payloads.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default separator between rendered key parts.
pub const DEFAULT_KEY_SEPARATOR: &str = "_";

/// Logical identity of an upstream request.
///
/// Auxiliary parameters are kept sorted by name so identical logical requests
/// always render to the same key, regardless of the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: String,
    subject: String,
    params: BTreeMap<String, String>,
}

impl CacheKey {
    /// Create a key for `operation` applied to `subject` (usually a symbol).
    pub fn new(operation: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            subject: subject.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add an auxiliary request parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Subject of the request.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Render the key as `operation<sep>subject<sep>k1=v1<sep>k2=v2...`.
    pub fn render(&self, separator: &str) -> String {
        let mut parts = Vec::with_capacity(2 + self.params.len());
        parts.push(self.operation.clone());
        parts.push(self.subject.clone());
        parts.extend(self.params.iter().map(|(k, v)| format!("{k}={v}")));
        parts.join(separator)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_KEY_SEPARATOR))
    }
}

/// Cache configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long an entry stays fresh after it was fetched.
    pub ttl: Duration,
    /// Separator used when rendering a [`CacheKey`].
    pub key_separator: String,
}

impl CacheConfig {
    /// Configuration with a custom TTL and the default key layout.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
        }
    }
}

/// A cached payload and the moment it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Rendered cache key
    pub key: String,
    /// Cached payload
    pub value: V,
    /// When the payload was fetched
    pub fetched_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Whether this entry is still within `ttl` at `now`.
    ///
    /// An entry whose timestamp lies in the future (the clock stepped back)
    /// is stale, so it is refetched instead of outliving the step.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .is_ok_and(|age| age < ttl)
    }
}

/// Snapshot of cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Stored entries, fresh or stale
    pub entries: usize,
    /// Entries still within the TTL
    pub live_entries: usize,
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that required a fetch
    pub misses: u64,
}

/// Get-or-fetch cache keyed by rendered [`CacheKey`]s.
///
/// Readers and writers on different keys never interfere. Concurrent misses
/// on the same key may both fetch; the last successful write wins and entries
/// are always replaced whole.
pub struct UpstreamCache<V> {
    config: CacheConfig,
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V> fmt::Debug for UpstreamCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamCache")
            .field("config", &self.config)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<V: Clone> Default for UpstreamCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> UpstreamCache<V> {
    /// Create a cache with the default 300 second TTL.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache with a custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cache configuration.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Render a key with the configured separator.
    pub fn render_key(&self, key: &CacheKey) -> String {
        key.render(&self.config.key_separator)
    }

    /// Return the cached value for `key` if it is still fresh.
    pub fn get_fresh(&self, key: &CacheKey) -> Option<V> {
        self.get_fresh_at(&self.render_key(key), Utc::now())
    }

    fn get_fresh_at(&self, rendered: &str, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(rendered)?;
        if entry.is_fresh_at(now, self.config.ttl) {
            tracing::debug!("Cache hit for {rendered}");
            Some(entry.value.clone())
        } else {
            tracing::debug!("Cache expired for {rendered}");
            None
        }
    }

    /// Store `value` under `key`, stamped with the current time.
    pub fn insert(&self, key: &CacheKey, value: V) {
        self.insert_at(self.render_key(key), value, Utc::now());
    }

    pub(crate) fn insert_at(&self, rendered: String, value: V, fetched_at: DateTime<Utc>) {
        let entry = CacheEntry {
            key: rendered.clone(),
            value,
            fetched_at,
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(rendered, entry);
    }

    /// Return the fresh cached value for `key`, or call `fetch` and cache its
    /// successful result.
    pub fn get_or_fetch<E, F>(&self, key: &CacheKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let rendered = self.render_key(key);
        if let Some(value) = self.get_fresh_at(&rendered, Utc::now()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = fetch()?;
        self.insert_at(rendered, value.clone(), Utc::now());
        Ok(value)
    }

    /// Async variant of [`get_or_fetch`](Self::get_or_fetch).
    ///
    /// No lock is held while `fetch` runs.
    pub async fn get_or_fetch_async<E, F, Fut>(&self, key: &CacheKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let rendered = self.render_key(key);
        if let Some(value) = self.get_fresh_at(&rendered, Utc::now()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Cache miss for {rendered}, fetching");
        let value = fetch().await?;
        self.insert_at(rendered, value.clone(), Utc::now());
        Ok(value)
    }

    /// Drop the entry for `key`, if any.
    pub fn invalidate(&self, key: &CacheKey) {
        let rendered = self.render_key(key);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&rendered);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Usage statistics.
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let live_entries = entries
            .values()
            .filter(|e| e.is_fresh_at(now, self.config.ttl))
            .count();

        CacheStats {
            entries: entries.len(),
            live_entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
