//! EventSource trait definition and local sources.
//!
//! An [`EventSource`] produces the complete event list of one conference in a
//! single call. The network-backed source lives in
//! [`crate::firestore`]; this module holds the trait, the file
//! source and the stand-in for sources that failed to build.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use confsched_core::{ConferenceEvent, TagCatalog};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::firestore::decode_response;

/// A boxed future for async trait methods.
///
/// Boxing keeps the trait object-safe so sources can be swapped at runtime.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of conference events.
///
/// Implementations fetch and decode the whole schedule per call; there is
/// no incremental sync.
pub trait EventSource: Send + Sync {
    /// Returns the name/type of this source (e.g., "firestore", "file").
    fn name(&self) -> &str;

    /// Fetches every event of the conference.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport failures or when the payload
    /// cannot be decoded.
    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<ConferenceEvent>>>;
}

/// Reads a saved `runQuery` response body from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    catalog: Arc<TagCatalog>,
}

impl FileSource {
    /// Creates a source reading `path` and resolving tags with `catalog`.
    pub fn new(path: impl Into<PathBuf>, catalog: Arc<TagCatalog>) -> Self {
        Self {
            path: path.into(),
            catalog,
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<ConferenceEvent>>> {
        Box::pin(async move {
            debug!(path = %self.path.display(), "reading saved response");
            let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                let error = if e.kind() == std::io::ErrorKind::NotFound {
                    ProviderError::not_found(format!("{} does not exist", self.path.display()))
                } else {
                    ProviderError::internal(format!(
                        "failed to read {}: {}",
                        self.path.display(),
                        e
                    ))
                };
                error.with_provider(self.name()).with_source(e)
            })?;
            decode_response(&body, &self.catalog).map_err(|e| e.with_provider(self.name()))
        })
    }
}

/// A source whose every fetch fails with the same error.
///
/// Used in place of a source that could not be built, so the failure is
/// reported by the load that needed it.
#[derive(Debug)]
pub struct ErrorSource {
    name: String,
    error: ProviderError,
}

impl ErrorSource {
    /// Creates a new error source.
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }
}

impl EventSource for ErrorSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<ConferenceEvent>>> {
        let error = self.error.detached().with_provider(&self.name);
        Box::pin(async move { Err(error) })
    }
}
