//! Cache-aside fun fact lookups against the external numbers provider.
//!
//! The cache never surfaces an error to its caller: any upstream failure
//! collapses to a fallback string, and failures are never cached. Entries
//! expire after the configured time-to-live and are replaced by the next
//! successful fetch. Concurrent misses for the same key may race and each
//! perform an outbound call; last writer wins.

use dashmap::DashMap;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;

/// Fallback returned for any non-timeout lookup failure.
pub const FALLBACK_FACT: &str = "No fun fact available.";

/// Fallback returned when the provider does not answer within the timeout.
pub const TIMEOUT_FACT: &str = "Fun fact request timed out.";

/// Errors internal to a single provider lookup. Never escapes the cache.
#[derive(Debug, thiserror::Error)]
enum FactError {
    #[error("provider request timed out")]
    Timeout,

    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("provider response missing `text` field")]
    MissingText,
}

/// Expected provider response body: `{"text": "..."}`.
#[derive(Debug, Deserialize)]
struct FactBody {
    text: Option<String>,
}

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Cache-aside store of fun facts keyed by integer.
///
/// Owns the outbound HTTP client; constructed once at startup and shared
/// across requests through [`crate::ServerState`].
pub struct FactCache {
    client: reqwest::Client,
    base_url: String,
    category: Option<String>,
    ttl: Duration,
    entries: DashMap<i64, CacheEntry>,
}

impl FactCache {
    /// Build the cache and its pooled HTTP client from configuration.
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fact_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.fact_provider_url.trim_end_matches('/').to_string(),
            category: config.fact_category.clone(),
            ttl: config.fact_cache_ttl(),
            entries: DashMap::new(),
        })
    }

    /// Number of entries currently held, live or expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the fun fact for `n`, consulting the cache first.
    ///
    /// Infallible: upstream problems degrade to a fallback string and the
    /// response stays HTTP 200 at the endpoint.
    pub async fn get_fun_fact(&self, n: i64) -> String {
        if let Some(entry) = self.entries.get(&n) {
            if entry.expires_at > Instant::now() {
                tracing::debug!(number = n, "Fun fact cache hit");
                return entry.value.clone();
            }
        }

        tracing::debug!(number = n, "Fun fact cache miss");
        match self.fetch(n).await {
            Ok(text) => {
                self.entries.insert(
                    n,
                    CacheEntry {
                        value: text.clone(),
                        expires_at: Instant::now() + self.ttl,
                    },
                );
                text
            }
            Err(FactError::Timeout) => {
                tracing::warn!(number = n, "Fun fact lookup timed out");
                TIMEOUT_FACT.to_string()
            }
            Err(err) => {
                tracing::warn!(number = n, error = %err, "Fun fact lookup failed");
                FALLBACK_FACT.to_string()
            }
        }
    }

    /// One outbound lookup, no retries.
    async fn fetch(&self, n: i64) -> Result<String, FactError> {
        let url = match &self.category {
            Some(category) => format!("{}/{}/{}?json", self.base_url, n, category),
            None => format!("{}/{}?json", self.base_url, n),
        };

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FactError::Timeout
            } else {
                FactError::Request(e)
            }
        })?;

        if !response.status().is_success() {
            return Err(FactError::Status(response.status()));
        }

        let body: FactBody = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FactError::Timeout
            } else {
                FactError::Request(e)
            }
        })?;

        body.text.ok_or(FactError::MissingText)
    }
}
