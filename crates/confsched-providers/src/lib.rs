//! Event sources and the schedule store.
//!
//! This crate connects the schedule engine to real data:
//!
//! - [`EventSource`] - The trait every event backend implements
//! - [`firestore`] - Decoding of Firestore `runQuery` responses and the
//!   HTTP source (feature `firestore`)
//! - [`FileSource`] - Reads a saved response from disk
//! - [`ScheduleStore`] - Holds the loaded events, derived days and load status
//! - [`ProviderError`] - Error types for source operations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │ Firestore REST  │    │  saved .json    │
//! └────────┬────────┘    └────────┬────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │ FirestoreSource │    │   FileSource    │
//! └────────┬────────┘    └────────┬────────┘
//!          │     EventSource      │
//!          └──────────┬───────────┘
//!                     ▼ decode_response()
//!              ┌─────────────────┐
//!              │ ConferenceEvent │
//!              └──────┬──────────┘
//!                     ▼ ScheduleStore::load()
//!              ┌─────────────────┐
//!              │  ScheduleDay    │
//!              └─────────────────┘
//! ```

pub mod error;
pub mod firestore;
pub mod source;
pub mod store;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
#[cfg(feature = "firestore")]
pub use firestore::FirestoreSource;
pub use firestore::{FirestoreConfig, decode_response};
pub use source::{BoxFuture, ErrorSource, EventSource, FileSource};
pub use store::ScheduleStore;
