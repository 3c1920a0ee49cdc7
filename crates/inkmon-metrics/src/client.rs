//! HTTP client for the metrics backend.

use std::time::Duration;

use tracing::debug;

use crate::reply::{parse_reply, QueryError};
use crate::MetricSource;

/// Per-query timeout. A query that exceeds it counts as absent.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a Prometheus-compatible instant-query endpoint.
///
/// Holds one reusable connection pool with [`QUERY_TIMEOUT`] applied to
/// every request. No retry and no caching: each tick stands alone, and the
/// per-tick cadence is the only recovery mechanism.
#[derive(Debug, Clone)]
pub struct PromClient {
    http: reqwest::Client,
    base_url: String,
}

impl PromClient {
    /// Client against `base_url`, e.g. `http://localhost:9090`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(QUERY_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, expr: &str) -> Result<f64, QueryError> {
        let url = format!("{}/api/v1/query", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", expr)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_reply(&body)
    }
}

impl MetricSource for PromClient {
    async fn query_value(&self, expr: &str) -> Option<f64> {
        match self.fetch(expr).await {
            Ok(value) => Some(value),
            Err(reason) => {
                debug!(expr, %reason, "metric absent");
                None
            }
        }
    }
}
