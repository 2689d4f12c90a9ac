//! HTTP client for the emoji search service

use std::time::{Duration, Instant};

use crate::config::ServerConfig;
use crate::error::{MojiError, MojiResult, RequestError};
use crate::search::{ErrorBody, SearchResponse};
use crate::services::format::format_elapsed;

/// Client for `GET {base_url}/search?q=...`
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SearchApi {
    http: reqwest::Client,
    base_url: String,
}

impl SearchApi {
    pub fn new(config: &ServerConfig) -> MojiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| MojiError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full endpoint URL with the query percent-encoded
    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Run one search. The query is sent as given; trimming and emptiness
    /// checks belong to the caller.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, RequestError> {
        let url = self.search_url(query);
        let started = Instant::now();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(
            %url,
            status = status.as_u16(),
            elapsed = %format_elapsed(started.elapsed().as_millis()),
            "Search response"
        );

        if !status.is_success() {
            // Error bodies are best-effort; anything unparsable just loses the detail
            let detail = match response.bytes().await {
                Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                    .ok()
                    .and_then(|b| b.detail_text()),
                Err(_) => None,
            };
            return Err(RequestError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                detail,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}
