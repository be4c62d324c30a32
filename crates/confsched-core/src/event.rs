//! Event types for conference schedules.
//!
//! This module provides the core types for representing conference events:
//! - [`ConferenceEvent`]: a talk, workshop, party or any other scheduled item
//! - [`Speaker`]: a person attached to an event
//! - [`SpeakerLink`]: a titled link on a speaker profile

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::tags::{Tag, TagCategory};

/// Events running longer than this are shown in the all-day bucket.
pub const ALL_DAY_THRESHOLD_SECS: i64 = 7 * 60 * 60;

/// A titled link on a speaker profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerLink {
    /// Link title (e.g. "Website").
    pub title: String,
    /// The target, absent when the source value was not a valid URL.
    pub url: Option<Url>,
}

impl SpeakerLink {
    /// Creates a new link.
    pub fn new(title: impl Into<String>, url: Option<Url>) -> Self {
        Self {
            title: title.into(),
            url,
        }
    }
}

/// A speaker, instructor or other person attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Speaker {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Organizations the speaker is affiliated with.
    pub affiliations: Vec<String>,
    /// Profile links.
    pub links: Vec<SpeakerLink>,
    /// Job title, if known.
    pub title: Option<String>,
}

impl Speaker {
    /// Creates a new speaker with only the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            affiliations: Vec::new(),
            links: Vec::new(),
            title: None,
        }
    }

    /// Builder method to add an affiliation.
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliations.push(affiliation.into());
        self
    }

    /// Builder method to add a link.
    pub fn with_link(mut self, link: SpeakerLink) -> Self {
        self.links.push(link);
        self
    }

    /// Builder method to set the job title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A single conference event.
///
/// Events are immutable values built once per fetch. Two events are equal
/// when their ids are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceEvent {
    /// Unique identifier (source-provided, unstructured).
    pub id: String,
    /// The event title.
    pub title: String,
    /// Description in lightweight markdown, carried verbatim.
    pub description: String,
    /// When the event starts, if scheduled.
    pub begin: Option<DateTime<Utc>>,
    /// When the event ends, if scheduled.
    pub end: Option<DateTime<Utc>>,
    /// Room or venue name.
    pub location: Option<String>,
    /// People presenting the event.
    pub speakers: Vec<Speaker>,
    /// Tags resolved from the catalog, in source order.
    pub tags: Vec<Tag>,
}

impl ConferenceEvent {
    /// Creates a new unscheduled event with required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            begin: None,
            end: None,
            location: None,
            speakers: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Builder method to set the start time.
    pub fn with_begin(mut self, begin: DateTime<Utc>) -> Self {
        self.begin = Some(begin);
        self
    }

    /// Builder method to set the end time.
    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Builder method to set both start and end.
    pub fn with_times(self, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.with_begin(begin).with_end(end)
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to add a speaker.
    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speakers.push(speaker);
        self
    }

    /// Builder method to set speakers.
    pub fn with_speakers(mut self, speakers: Vec<Speaker>) -> Self {
        self.speakers = speakers;
        self
    }

    /// Builder method to add a tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Builder method to set tags.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the first tag in the event-category category.
    pub fn category_tag(&self) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|t| t.category == TagCategory::EventCategory)
    }

    /// Returns the compact secondary tag for this event.
    ///
    /// Categories are tried in [`TagCategory::DETAIL_TYPES`] order; the first
    /// event tag in the first matching category wins.
    pub fn detail_tag(&self) -> Option<&Tag> {
        TagCategory::DETAIL_TYPES
            .iter()
            .find_map(|category| self.tags.iter().find(|t| t.category == *category))
    }

    /// Returns `end - begin` when both are known.
    pub fn duration(&self) -> Option<Duration> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Some(end - begin),
            _ => None,
        }
    }

    /// Returns true if the event runs strictly longer than seven hours.
    ///
    /// Events missing either timestamp are never all-day.
    pub fn is_all_day(&self) -> bool {
        self.duration()
            .is_some_and(|d| d > Duration::seconds(ALL_DAY_THRESHOLD_SECS))
    }

    /// Returns true if the event carries the given tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Display ordering used for every list of events.
    ///
    /// Events are ordered by category tag id; events with a category come
    /// before events without one; remaining ties fall back to the event id.
    pub fn schedule_cmp(&self, other: &Self) -> Ordering {
        let by_category = match (self.category_tag(), other.category_tag()) {
            (Some(lhs), Some(rhs)) => lhs.id.cmp(&rhs.id),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_category.then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialEq for ConferenceEvent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConferenceEvent {}

impl Hash for ConferenceEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Sorts events in display order (see [`ConferenceEvent::schedule_cmp`]).
pub fn sort_events(events: &mut [ConferenceEvent]) {
    events.sort_by(|a, b| a.schedule_cmp(b));
}
