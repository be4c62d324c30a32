//! HTTP source querying the Firestore REST API.

use std::sync::Arc;

use confsched_core::{ConferenceEvent, TagCatalog};
use tracing::{debug, info};
use url::Url;

use super::config::{FirestoreConfig, events_query};
use super::decode::decode_response;
use crate::error::{ProviderError, ProviderResult};
use crate::source::{BoxFuture, EventSource};

/// Fetches a conference's events with a single `runQuery` POST.
#[derive(Debug, Clone)]
pub struct FirestoreSource {
    http_client: reqwest::Client,
    url: Url,
    catalog: Arc<TagCatalog>,
}

impl FirestoreSource {
    /// Creates a new source for `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &FirestoreConfig, catalog: Arc<TagCatalog>) -> ProviderResult<Self> {
        let url = config.query_url()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
                    .with_source(e)
            })?;

        Ok(Self {
            http_client,
            url,
            catalog,
        })
    }

    /// The `runQuery` endpoint this source posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch_body(&self) -> ProviderResult<String> {
        debug!(url = %self.url, "querying firestore");

        // The endpoint accepts the JSON query as text/plain.
        let response = self
            .http_client
            .post(self.url.clone())
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .header(reqwest::header::ACCEPT, "*/*")
            .body(events_query().to_string())
            .send()
            .await
            .map_err(|e| {
                let error = if e.is_timeout() {
                    ProviderError::network("request timeout")
                } else if e.is_connect() {
                    ProviderError::network(format!("connection failed: {}", e))
                } else {
                    ProviderError::network(format!("request failed: {}", e))
                };
                error.with_source(e)
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProviderError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_http_status(status.as_u16(), &body));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))
    }
}

impl EventSource for FirestoreSource {
    fn name(&self) -> &str {
        "firestore"
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<ConferenceEvent>>> {
        Box::pin(async move {
            let body = self
                .fetch_body()
                .await
                .map_err(|e| e.with_provider(self.name()))?;
            let events =
                decode_response(&body, &self.catalog).map_err(|e| e.with_provider(self.name()))?;
            info!(events = events.len(), bytes = body.len(), "fetched schedule");
            Ok(events)
        })
    }
}
