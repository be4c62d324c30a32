//! Firestore-backed event source.
//!
//! Conference data is published in a public Firestore database. The whole
//! events collection is fetched with one structured `runQuery` request and
//! every returned document is mapped onto a
//! [`ConferenceEvent`](confsched_core::ConferenceEvent).
//!
//! Decoding is always available so saved responses can be read offline; the
//! HTTP source needs the `firestore` feature.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use confsched_core::TagCatalog;
//! use confsched_providers::firestore::{FirestoreConfig, FirestoreSource};
//!
//! let catalog = Arc::new(TagCatalog::builtin()?);
//! let source = FirestoreSource::new(&FirestoreConfig::default(), catalog)?;
//! let events = source.fetch_events().await?;
//! ```

mod config;
mod decode;
#[cfg(feature = "firestore")]
mod source;
mod value;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_CONFERENCE, DEFAULT_PROJECT, DEFAULT_TIMEOUT_SECS, FirestoreConfig,
    events_query,
};
pub use decode::{decode_response, document_to_event};
#[cfg(feature = "firestore")]
pub use source::FirestoreSource;
pub use value::{ArrayValue, Document, MapValue, QueryResponse, Value};
