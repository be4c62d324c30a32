//! Subcommand implementations.
//!
//! Every data command runs against a [`Context`]: the validated
//! configuration plus the catalog, timezone and formatter derived from it.

pub mod config;
pub mod schedule;
pub mod search;
pub mod show;
pub mod tags;

use std::sync::Arc;

use chrono_tz::Tz;
use confsched_core::{OutputFormat, OutputFormatter, Tag, TagCatalog, parse_timezone};
use confsched_providers::{
    ErrorSource, EventSource, FileSource, ProviderError, ProviderResult, ScheduleStore,
};
use serde::Serialize;
use tracing::debug;

use crate::config::{ClientConfig, SourceKind};
use crate::error::{ClientError, ClientResult};

/// Everything a command needs, built once from the configuration.
#[derive(Debug)]
pub struct Context {
    pub config: ClientConfig,
    pub catalog: Arc<TagCatalog>,
    pub tz: Tz,
    pub formatter: OutputFormatter,
    pub output_format: OutputFormat,
}

impl Context {
    /// Resolves the timezone and loads the tag catalog.
    pub fn new(config: ClientConfig, output_format: OutputFormat) -> ClientResult<Self> {
        let tz = parse_timezone(&config.timezone).map_err(|e| ClientError::Config(e.to_string()))?;
        let catalog = match config.catalog.path {
            Some(ref path) => {
                debug!(path = %path.display(), "loading tag catalog");
                TagCatalog::load_from(path)?
            }
            None => TagCatalog::builtin()?,
        };
        let formatter = OutputFormatter::new(config.display.format_options(), tz);

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            tz,
            formatter,
            output_format,
        })
    }

    /// Builds the configured event source.
    ///
    /// A source that cannot be built is replaced by an [`ErrorSource`], so
    /// the problem surfaces as the store's load error.
    pub fn source(&self) -> Arc<dyn EventSource> {
        match self.build_source() {
            Ok(source) => source,
            Err(err) => {
                let name = match self.config.source.kind {
                    SourceKind::File => "file",
                    SourceKind::Firestore => "firestore",
                };
                debug!(source = name, error = %err, "source unavailable");
                Arc::new(ErrorSource::new(name, err))
            }
        }
    }

    fn build_source(&self) -> ProviderResult<Arc<dyn EventSource>> {
        match self.config.source.kind {
            SourceKind::File => {
                let path = self.config.source.path.clone().ok_or_else(|| {
                    ProviderError::configuration("source kind \"file\" requires a path")
                })?;
                Ok(Arc::new(FileSource::new(path, Arc::clone(&self.catalog))))
            }
            #[cfg(feature = "firestore")]
            SourceKind::Firestore => {
                let source = confsched_providers::FirestoreSource::new(
                    &self.config.source.firestore_config(),
                    Arc::clone(&self.catalog),
                )?;
                Ok(Arc::new(source))
            }
            #[cfg(not(feature = "firestore"))]
            SourceKind::Firestore => Err(ProviderError::configuration(
                "built without firestore support, use a file source",
            )),
        }
    }

    /// Creates a store and loads the schedule into it.
    pub async fn load_store(&self) -> ClientResult<ScheduleStore> {
        let store = ScheduleStore::new(self.source(), self.tz);
        store.load().await?;
        Ok(store)
    }

    /// Looks up tag ids given on the command line.
    pub fn resolve_tags(&self, ids: &[u32]) -> ClientResult<Vec<Tag>> {
        ids.iter()
            .map(|id| {
                self.catalog
                    .get(*id)
                    .cloned()
                    .ok_or_else(|| ClientError::InvalidArgument(format!("unknown tag id {}", id)))
            })
            .collect()
    }

    /// Returns true when output should be JSON.
    pub fn is_json(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

/// Renders a value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::Output(format!("failed to serialize output: {}", e)))
}
