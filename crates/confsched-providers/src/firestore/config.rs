//! Firestore source configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::error::{ProviderError, ProviderResult};

/// Public Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
/// Project hosting the conference data.
pub const DEFAULT_PROJECT: &str = "junctor-hackertracker";
/// Conference whose events are queried.
pub const DEFAULT_CONFERENCE: &str = "DEFCON33";
/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to query the conference's events collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project: String,
    pub conference: String,
    pub timeout: Duration,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            conference: DEFAULT_CONFERENCE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FirestoreConfig {
    /// Builder method to set the REST base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the project id.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Builder method to set the conference code.
    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = conference.into();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the `runQuery` endpoint for the configured conference.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty identifiers or a base URL that
    /// does not parse.
    pub fn query_url(&self) -> ProviderResult<Url> {
        if self.project.trim().is_empty() {
            return Err(ProviderError::configuration("firestore project is empty"));
        }
        if self.conference.trim().is_empty() {
            return Err(ProviderError::configuration("conference code is empty"));
        }
        let raw = format!(
            "{}/projects/{}/databases/(default)/documents/conferences/{}:runQuery",
            self.base_url.trim_end_matches('/'),
            self.project.trim(),
            self.conference.trim()
        );
        Url::parse(&raw).map_err(|e| {
            ProviderError::configuration(format!("invalid base URL {:?}: {}", self.base_url, e))
                .with_source(e)
        })
    }
}

/// The structured query for every event, ordered by start then document name.
pub fn events_query() -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": "events" }],
            "orderBy": [
                { "field": { "fieldPath": "begin_timestamp" }, "direction": "ASCENDING" },
                { "field": { "fieldPath": "__name__" }, "direction": "ASCENDING" }
            ]
        }
    })
}
