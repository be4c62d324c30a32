//! Process-wide schedule state.
//!
//! [`ScheduleStore`] owns the loaded events, the derived day list and the
//! load status. Readers get clones; only [`ScheduleStore::load`] mutates.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use confsched_core::{ConferenceEvent, ScheduleDay, SearchQuery, SearchSection, build_schedule, search};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::source::EventSource;

#[derive(Debug, Default)]
struct StoreState {
    last_error: Option<ProviderError>,
    events: Vec<ConferenceEvent>,
    days: Vec<ScheduleDay>,
    loaded_at: Option<DateTime<Utc>>,
}

/// Decrements the in-flight counter when a load finishes or is dropped.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Holds the schedule of one conference in a reference timezone.
pub struct ScheduleStore {
    source: Arc<dyn EventSource>,
    tz: Tz,
    in_flight: AtomicUsize,
    state: RwLock<StoreState>,
}

impl ScheduleStore {
    /// Creates an empty store fed by `source`.
    pub fn new(source: Arc<dyn EventSource>, tz: Tz) -> Self {
        Self {
            source,
            tz,
            in_flight: AtomicUsize::new(0),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// The reference timezone used for grouping.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetches the event list and rebuilds the schedule.
    ///
    /// The previous error is cleared when the load starts. On success the
    /// events and days are replaced; on failure they are kept and the error
    /// is recorded. When loads overlap, the one finishing last wins.
    ///
    /// Returns the number of events loaded.
    pub async fn load(&self) -> ProviderResult<usize> {
        let _loading = LoadingGuard::new(&self.in_flight);
        self.state.write().await.last_error = None;

        let result = self.source.fetch_events().await;

        let mut state = self.state.write().await;
        match result {
            Ok(events) => {
                let days = build_schedule(&events, &self.tz);
                let count = events.len();
                info!(
                    source = self.source.name(),
                    events = count,
                    days = days.len(),
                    "schedule loaded"
                );
                state.events = events;
                state.days = days;
                state.loaded_at = Some(Utc::now());
                Ok(count)
            }
            Err(err) => {
                warn!(
                    source = self.source.name(),
                    error = %err,
                    kept = state.events.len(),
                    "schedule load failed, keeping previous events"
                );
                state.last_error = Some(err.detached());
                Err(err)
            }
        }
    }

    /// Returns true while at least one load is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// The error of the most recent failed load, if it has not been cleared.
    pub async fn last_error(&self) -> Option<ProviderError> {
        self.state
            .read()
            .await
            .last_error
            .as_ref()
            .map(ProviderError::detached)
    }

    /// When the current events were loaded.
    pub async fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.loaded_at
    }

    /// The current event list, in source order.
    pub async fn events(&self) -> Vec<ConferenceEvent> {
        self.state.read().await.events.clone()
    }

    /// Looks up one current event by id.
    pub async fn event(&self, id: &str) -> Option<ConferenceEvent> {
        self.state
            .read()
            .await
            .events
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// The current day list.
    pub async fn days(&self) -> Vec<ScheduleDay> {
        self.state.read().await.days.clone()
    }

    /// Runs `query` over the current events.
    pub async fn search(&self, query: &SearchQuery) -> Vec<SearchSection> {
        let state = self.state.read().await;
        search(&state.events, query, &self.tz)
    }
}

impl std::fmt::Debug for ScheduleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleStore")
            .field("source", &self.source.name())
            .field("tz", &self.tz)
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
