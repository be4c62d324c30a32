//! Free-text and tag search over events.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{ConferenceEvent, sort_events};
use crate::schedule::group_by_day;
use crate::tags::Tag;

/// Search parameters: free text plus selected tag filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text typed by the user.
    pub text: String,
    /// Tags every result must carry.
    pub tags: Vec<Tag>,
}

impl SearchQuery {
    /// Creates a text-only query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Builder method to add a tag filter.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Builder method to set the tag filters.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true when the user has typed anything or picked a filter.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty() || !self.tags.is_empty()
    }

    /// Returns true if `event` passes both the tag and the text filter.
    pub fn matches(&self, event: &ConferenceEvent) -> bool {
        if !self.tags.iter().all(|tag| event.has_tag(tag)) {
            return false;
        }

        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&event.title)
            || event.tags.iter().any(|t| contains(&t.label))
            || event.location.as_deref().is_some_and(contains)
            || event.speakers.iter().any(|s| contains(&s.name))
    }
}

/// Search results of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Local midnight of the day, as an instant.
    pub id: DateTime<Utc>,
    /// Matching events in display order.
    pub events: Vec<ConferenceEvent>,
}

/// Filters `events` with `query` and groups the matches by day.
///
/// Matches without a start time are dropped. Sections are ordered by day and
/// events within a section follow the display order.
pub fn search<Tz: TimeZone>(
    events: &[ConferenceEvent],
    query: &SearchQuery,
    tz: &Tz,
) -> Vec<SearchSection> {
    let days = group_by_day(events.iter().filter(|e| query.matches(e)), tz);

    let sections: Vec<SearchSection> = days
        .into_iter()
        .map(|(id, mut events)| {
            sort_events(&mut events);
            SearchSection { id, events }
        })
        .collect();

    debug!(
        text = %query.text,
        tags = query.tags.len(),
        sections = sections.len(),
        "search finished"
    );
    sections
}
