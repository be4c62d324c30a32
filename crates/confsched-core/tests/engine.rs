//! End-to-end checks of the schedule engine against the bundled catalog.

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::America::Los_Angeles;
use confsched_core::{
    ConferenceEvent, SearchQuery, StartGroupId, TagCatalog, build_schedule, day_start, search,
    suggest_tags,
};

/// `h:min` on 2025-08-`day` in Las Vegas (PDT, UTC-7).
fn vegas(day: u32, h: i64, min: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, day, 7, 0, 0).unwrap()
        + Duration::hours(h)
        + Duration::minutes(min)
}

fn catalog() -> TagCatalog {
    TagCatalog::builtin().expect("builtin catalog parses")
}

/// A mixed conference weekend: talks, workshops, villages, a party,
/// plus events that never made it onto the schedule.
fn weekend(catalog: &TagCatalog) -> Vec<ConferenceEvent> {
    let event = |id: &str, begin: DateTime<Utc>, minutes: i64, tag_ids: &[u32]| {
        ConferenceEvent::new(id, format!("Event {}", id), "")
            .with_times(begin, begin + Duration::minutes(minutes))
            .with_tags(catalog.resolve(tag_ids.iter().copied()))
    };
    vec![
        event("101", vegas(8, 9, 0), 30, &[47607]),
        event("102", vegas(8, 9, 0), 8 * 60, &[48160]),
        event("103", vegas(8, 9, 0), 30, &[47607, 48251]),
        event("104", vegas(8, 9, 0) + Duration::seconds(42), 20, &[48051]),
        event("105", vegas(8, 10, 30), 7 * 60, &[48112]),
        event("106", vegas(8, 10, 30), 7 * 60 + 1, &[48104]),
        event("107", vegas(8, 23, 45), 60, &[48051]),
        event("201", vegas(9, 0, 15), 45, &[47607, 48097]),
        event("202", vegas(9, 11, 0), 60, &[48160, 48104, 48251]),
        event("301", vegas(10, 12, 0), 90, &[99_999]),
        ConferenceEvent::new("900", "Unscheduled", "").with_tags(catalog.resolve([48251])),
        ConferenceEvent::new("901", "End only", "").with_end(vegas(9, 12, 0)),
    ]
}

fn timed_ids(events: &[ConferenceEvent]) -> HashSet<String> {
    events
        .iter()
        .filter(|e| e.begin.is_some())
        .map(|e| e.id.clone())
        .collect()
}

#[test]
fn build_schedule_is_idempotent() {
    let catalog = catalog();
    let events = weekend(&catalog);
    assert_eq!(
        build_schedule(&events, &Los_Angeles),
        build_schedule(&events, &Los_Angeles)
    );

    let mut reversed = events.clone();
    reversed.reverse();
    assert_eq!(
        build_schedule(&events, &Los_Angeles),
        build_schedule(&reversed, &Los_Angeles)
    );
}

#[test]
fn every_timed_event_lands_once_on_its_local_day() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let days = build_schedule(&events, &Los_Angeles);

    let mut seen = HashSet::new();
    for day in &days {
        for event in day.events() {
            assert!(seen.insert(event.id.clone()), "{} seen twice", event.id);
            let begin = event.begin.expect("scheduled events have a start");
            assert_eq!(day_start(begin, &Los_Angeles), day.id);
        }
    }
    assert_eq!(seen, timed_ids(&events));
}

#[test]
fn days_and_groups_are_ascending() {
    let catalog = catalog();
    let days = build_schedule(&weekend(&catalog), &Los_Angeles);

    assert!(days.windows(2).all(|w| w[0].id < w[1].id));
    for day in &days {
        let ids: Vec<StartGroupId> = day.start_groups.iter().map(|g| g.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(day.start_groups.iter().skip(1).all(|g| !g.is_all_day()));
    }
}

#[test]
fn all_day_bucket_and_threshold() {
    let catalog = catalog();
    let days = build_schedule(&weekend(&catalog), &Los_Angeles);
    let friday = &days[0];

    let all_day = friday.all_day_group().expect("friday has all-day events");
    let all_day_ids: Vec<&str> = all_day.events.iter().map(|e| e.id.as_str()).collect();
    // 102 is a workshop (category), 106 only has an organizer tag.
    assert_eq!(all_day_ids, vec!["102", "106"]);

    // Exactly seven hours stays in the 10:30 group.
    let half_past_ten = friday
        .start_groups
        .iter()
        .find(|g| g.id == StartGroupId::At(vegas(8, 10, 30)))
        .expect("10:30 group");
    let ids: Vec<&str> = half_past_ten.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["105"]);
}

#[test]
fn same_minute_ordering() {
    let catalog = catalog();
    let days = build_schedule(&weekend(&catalog), &Los_Angeles);
    let nine = days[0]
        .start_groups
        .iter()
        .find(|g| g.id == StartGroupId::At(vegas(8, 9, 0)))
        .expect("09:00 group");
    let ids: Vec<&str> = nine.events.iter().map(|e| e.id.as_str()).collect();
    // Talks (47607) by id, then the party (48051) that started 42s later.
    assert_eq!(ids, vec!["101", "103", "104"]);
}

#[test]
fn late_night_and_after_midnight_split_days() {
    let catalog = catalog();
    let days = build_schedule(&weekend(&catalog), &Los_Angeles);
    assert_eq!(days.len(), 3);
    assert!(days[0].events().any(|e| e.id == "107"));
    assert!(days[1].events().any(|e| e.id == "201"));
}

#[test]
fn unknown_tag_ids_are_dropped() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let event = events.iter().find(|e| e.id == "301").expect("event 301");
    assert!(event.tags.is_empty());
    assert!(event.category_tag().is_none());
}

#[test]
fn empty_search_returns_every_timed_event_once() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let sections = search(&events, &SearchQuery::default(), &Los_Angeles);

    let found: Vec<String> = sections
        .iter()
        .flat_map(|s| s.events.iter().map(|e| e.id.clone()))
        .collect();
    let unique: HashSet<String> = found.iter().cloned().collect();
    assert_eq!(found.len(), unique.len());
    assert_eq!(unique, timed_ids(&events));
}

#[test]
fn tag_filters_narrow_results() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let cloud = catalog.get(48251).cloned().expect("Cloud tag");
    let workshop = catalog.get(48160).cloned().expect("workshop tag");

    let only_cloud = SearchQuery::default().with_tag(cloud.clone());
    let both = SearchQuery::default().with_tags(vec![cloud, workshop]);

    let ids = |query: &SearchQuery| -> Vec<String> {
        search(&events, query, &Los_Angeles)
            .into_iter()
            .flat_map(|s| s.events.into_iter().map(|e| e.id))
            .collect()
    };
    assert_eq!(ids(&only_cloud), vec!["103", "202"]);
    assert_eq!(ids(&both), vec!["202"]);
}

#[test]
fn search_text_matches_tag_labels() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let sections = search(&events, &SearchQuery::new("AppSec"), &Los_Angeles);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].events[0].id, "201");
}

#[test]
fn filter_tag_nobody_has_yields_nothing() {
    let catalog = catalog();
    let events = weekend(&catalog);
    let vendor = catalog.get(47613).cloned().expect("vendor tag");
    let query = SearchQuery::default().with_tag(vendor);
    assert!(search(&events, &query, &Los_Angeles).is_empty());
}

#[test]
fn villa_suggestions() {
    let catalog = catalog();
    let suggestions = suggest_tags(&catalog, "villa", &[]);
    assert!(!suggestions.is_empty());
    assert!(
        suggestions
            .iter()
            .all(|t| t.label.to_lowercase().contains("villa"))
    );
    assert!(suggestions.windows(2).all(|w| w[0].id < w[1].id));

    let selected = vec![suggestions[0].clone()];
    let remaining = suggest_tags(&catalog, "villa", &selected);
    assert_eq!(remaining.len(), suggestions.len() - 1);
    assert!(!remaining.contains(&suggestions[0]));
}
