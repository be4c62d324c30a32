//! Day and start-time grouping.
//!
//! [`build_schedule`] turns a flat event list into the timeline structure:
//! one [`ScheduleDay`] per reference-timezone calendar day, each holding
//! [`StartGroup`]s keyed by minute-truncated start time, with long events
//! pulled into a leading all-day group.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{ConferenceEvent, sort_events};
use crate::time::{StartGroupId, day_start, minute_start};

/// Events sharing a start minute, or the all-day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGroup {
    /// Group key.
    pub id: StartGroupId,
    /// Events in display order.
    pub events: Vec<ConferenceEvent>,
}

impl StartGroup {
    /// Returns true for the all-day bucket.
    pub fn is_all_day(&self) -> bool {
        self.id.is_all_day()
    }
}

/// All timed events of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Local midnight of the day, as an instant.
    pub id: DateTime<Utc>,
    /// The all-day group (if any) followed by start-time groups, ascending.
    pub start_groups: Vec<StartGroup>,
}

impl ScheduleDay {
    /// Returns the all-day group, if the day has one.
    pub fn all_day_group(&self) -> Option<&StartGroup> {
        self.start_groups.first().filter(|g| g.is_all_day())
    }

    /// Returns the start-time groups, skipping the all-day group.
    pub fn timed_groups(&self) -> impl Iterator<Item = &StartGroup> {
        self.start_groups.iter().filter(|g| !g.is_all_day())
    }

    /// Iterates over every event of the day.
    pub fn events(&self) -> impl Iterator<Item = &ConferenceEvent> {
        self.start_groups.iter().flat_map(|g| g.events.iter())
    }

    /// Total number of events in the day.
    pub fn event_count(&self) -> usize {
        self.start_groups.iter().map(|g| g.events.len()).sum()
    }
}

/// Buckets events by local midnight of their start time.
///
/// Events without a start time are skipped.
pub(crate) fn group_by_day<'a, Tz, I>(
    events: I,
    tz: &Tz,
) -> BTreeMap<DateTime<Utc>, Vec<ConferenceEvent>>
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a ConferenceEvent>,
{
    let mut days: BTreeMap<DateTime<Utc>, Vec<ConferenceEvent>> = BTreeMap::new();
    for event in events {
        let Some(begin) = event.begin else {
            continue;
        };
        days.entry(day_start(begin, tz))
            .or_default()
            .push(event.clone());
    }
    days
}

/// Builds the day-by-day schedule for `events` in the reference timezone.
pub fn build_schedule<Tz: TimeZone>(events: &[ConferenceEvent], tz: &Tz) -> Vec<ScheduleDay> {
    let days = group_by_day(events, tz);
    let scheduled: usize = days.values().map(Vec::len).sum();

    let schedule: Vec<ScheduleDay> = days
        .into_iter()
        .map(|(id, events)| ScheduleDay {
            id,
            start_groups: build_start_groups(events, tz),
        })
        .collect();

    debug!(
        days = schedule.len(),
        scheduled,
        unscheduled = events.len() - scheduled,
        "built schedule"
    );
    schedule
}

/// Splits one day's events into the all-day group and start-time groups.
fn build_start_groups<Tz: TimeZone>(events: Vec<ConferenceEvent>, tz: &Tz) -> Vec<StartGroup> {
    let (mut all_day, timed): (Vec<_>, Vec<_>) =
        events.into_iter().partition(ConferenceEvent::is_all_day);

    let mut by_minute: BTreeMap<DateTime<Utc>, Vec<ConferenceEvent>> = BTreeMap::new();
    for event in timed {
        if let Some(begin) = event.begin {
            by_minute
                .entry(minute_start(begin, tz))
                .or_default()
                .push(event);
        }
    }

    let mut groups = Vec::with_capacity(by_minute.len() + 1);
    if !all_day.is_empty() {
        sort_events(&mut all_day);
        groups.push(StartGroup {
            id: StartGroupId::AllDay,
            events: all_day,
        });
    }
    groups.extend(by_minute.into_iter().map(|(minute, mut events)| {
        sort_events(&mut events);
        StartGroup {
            id: StartGroupId::At(minute),
            events,
        }
    }));
    groups
}
