//! Output formatting for schedules, search results and tags.
//!
//! Two outputs are supported:
//! - **TTY**: indented plain text, one line per event
//! - **JSON**: serializable views with times rendered in the reference
//!   timezone
//!
//! # Example
//!
//! ```rust
//! use confsched_core::format::{FormatOptions, OutputFormatter};
//! use confsched_core::schedule::build_schedule;
//!
//! let tz = chrono_tz::America::Los_Angeles;
//! let formatter = OutputFormatter::new(FormatOptions::default(), tz);
//! let days = build_schedule(&[], &tz);
//! assert_eq!(formatter.format_schedule(&days), "No events");
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::event::ConferenceEvent;
use crate::schedule::{ScheduleDay, StartGroup};
use crate::search::SearchSection;
use crate::tags::Tag;
use crate::time::StartGroupId;

const NO_EVENTS_TEXT: &str = "No events";
const ALL_DAY_HEADER: &str = "All-Day";
const INDENT: &str = "  ";

/// The output format for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Time format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// 24-hour format (e.g., "14:30").
    #[default]
    H24,
    /// 12-hour format with AM/PM (e.g., "2:30 PM").
    H12,
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Maximum length for event titles (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// Hour separator character (e.g., ":", "h").
    pub hour_separator: String,
    /// Time format preference.
    pub time_format: TimeFormat,
    /// Whether to append the detail tag to each event line.
    pub show_detail_tag: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_title_length: None,
            hour_separator: ":".to_string(),
            time_format: TimeFormat::H24,
            show_detail_tag: true,
        }
    }
}

/// A single event in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEvent {
    pub id: String,
    pub title: String,
    /// Start time in RFC 3339, reference timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    /// End time in RFC 3339, reference timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Label of the category tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Label of the detail tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub is_all_day: bool,
    pub tag_ids: Vec<u32>,
    pub speakers: Vec<String>,
}

/// A start-time group in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonGroup {
    /// Start minute in RFC 3339, absent for the all-day group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub all_day: bool,
    pub events: Vec<JsonEvent>,
}

/// A schedule day in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDay {
    /// Local date (`YYYY-MM-DD`).
    pub date: String,
    /// Local midnight in RFC 3339.
    pub start: String,
    pub groups: Vec<JsonGroup>,
}

/// A search section in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSection {
    /// Local date (`YYYY-MM-DD`).
    pub date: String,
    pub events: Vec<JsonEvent>,
}

/// A tag in the JSON detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEventTag {
    pub id: u32,
    pub label: String,
    pub category: String,
}

/// A speaker link in the JSON detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSpeakerLink {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A speaker in the JSON detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSpeaker {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub affiliations: Vec<String>,
    pub links: Vec<JsonSpeakerLink>,
}

/// Everything known about one event, for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEventDetail {
    pub id: String,
    pub title: String,
    /// Lightweight markdown, verbatim.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_all_day: bool,
    /// Every tag, in source order.
    pub tags: Vec<JsonEventTag>,
    pub speakers: Vec<JsonSpeaker>,
}

/// Renders schedule structures in the reference timezone.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    options: FormatOptions,
    tz: Tz,
}

impl OutputFormatter {
    /// Creates a new formatter.
    pub fn new(options: FormatOptions, tz: Tz) -> Self {
        Self { options, tz }
    }

    /// Creates a formatter with default options.
    pub fn with_defaults(tz: Tz) -> Self {
        Self::new(FormatOptions::default(), tz)
    }

    /// Formats the whole schedule, one block per day.
    pub fn format_schedule(&self, days: &[ScheduleDay]) -> String {
        if days.is_empty() {
            return NO_EVENTS_TEXT.to_string();
        }
        days.iter()
            .map(|day| self.format_day(day).join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats a single day: the day heading, then a header per group with
    /// the group's events indented below it.
    pub fn format_day(&self, day: &ScheduleDay) -> Vec<String> {
        let mut lines = vec![self.format_day_heading(day.id)];
        for group in &day.start_groups {
            lines.push(format!("{}{}", INDENT, self.format_group_header(group)));
            lines.extend(
                group
                    .events
                    .iter()
                    .map(|e| format!("{}{}{}", INDENT, INDENT, self.format_event_line(e))),
            );
        }
        lines
    }

    /// Formats search results, one block per day.
    pub fn format_search(&self, sections: &[SearchSection]) -> String {
        if sections.is_empty() {
            return NO_EVENTS_TEXT.to_string();
        }
        sections
            .iter()
            .map(|section| {
                let mut lines = vec![self.format_day_heading(section.id)];
                lines.extend(
                    section
                        .events
                        .iter()
                        .map(|e| format!("{}{}", INDENT, self.format_event_line(e))),
                );
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats a tag list, one tag per line.
    pub fn format_tags(&self, tags: &[&Tag]) -> String {
        if tags.is_empty() {
            return "No tags".to_string();
        }
        tags.iter()
            .map(|t| format!("{:<7}{} ({})", t.id, t.label, t.category.display_name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats one event: `[Category] Title · time · detail`.
    pub fn format_event_line(&self, event: &ConferenceEvent) -> String {
        let mut line = String::new();
        if let Some(category) = event.category_tag() {
            line.push_str(&format!("[{}] ", category.label));
        }
        line.push_str(&self.truncate_title(&event.title));
        if let Some(time) = self.format_time_range(event) {
            line.push_str(" · ");
            line.push_str(&time);
        }
        if self.options.show_detail_tag {
            if let Some(detail) = event.detail_tag() {
                line.push_str(" · ");
                line.push_str(&detail.label);
            }
        }
        line
    }

    /// Formats the time range of an event.
    ///
    /// Returns `start–end` when both are known, `ends end` when only the end
    /// is, and nothing otherwise.
    pub fn format_time_range(&self, event: &ConferenceEvent) -> Option<String> {
        match (event.begin, event.end) {
            (Some(begin), Some(end)) => Some(format!(
                "{}–{}",
                self.format_clock(begin),
                self.format_clock(end)
            )),
            (_, Some(end)) => Some(format!("ends {}", self.format_clock(end))),
            _ => None,
        }
    }

    /// Converts the schedule to JSON views.
    pub fn format_schedule_json(&self, days: &[ScheduleDay]) -> Vec<JsonDay> {
        days.iter()
            .map(|day| JsonDay {
                date: self.format_date(day.id),
                start: self.to_rfc3339(day.id),
                groups: day
                    .start_groups
                    .iter()
                    .map(|group| JsonGroup {
                        start: group.id.instant().map(|i| self.to_rfc3339(i)),
                        all_day: group.is_all_day(),
                        events: group.events.iter().map(|e| self.to_json_event(e)).collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Converts search results to JSON views.
    pub fn format_search_json(&self, sections: &[SearchSection]) -> Vec<JsonSection> {
        sections
            .iter()
            .map(|section| JsonSection {
                date: self.format_date(section.id),
                events: section.events.iter().map(|e| self.to_json_event(e)).collect(),
            })
            .collect()
    }

    /// Formats the detail view of one event.
    ///
    /// Blocks are separated by blank lines: title and date, every tag,
    /// location, speakers, then the description. Empty blocks are left out
    /// and the title is never truncated.
    pub fn format_event_detail(&self, event: &ConferenceEvent) -> String {
        let mut header = vec![event.title.clone()];
        let when = match (event.begin, self.format_time_range(event)) {
            (Some(begin), Some(range)) => Some(format!("{} · {}", self.format_day_heading(begin), range)),
            (Some(begin), None) => Some(self.format_day_heading(begin)),
            (None, range) => range,
        };
        header.extend(when);

        let mut blocks = vec![header.join("\n")];
        if !event.tags.is_empty() {
            let tags: Vec<String> = event
                .tags
                .iter()
                .map(|t| format!("{}{} ({})", INDENT, t.label, t.category.display_name()))
                .collect();
            blocks.push(format!("Tags:\n{}", tags.join("\n")));
        }
        if let Some(ref location) = event.location {
            blocks.push(format!("Location: {}", location));
        }
        if !event.speakers.is_empty() {
            let mut lines = vec!["Speakers:".to_string()];
            for speaker in &event.speakers {
                let mut line = format!("{}{}", INDENT, speaker.name);
                if let Some(ref title) = speaker.title {
                    line.push_str(&format!(", {}", title));
                }
                if !speaker.affiliations.is_empty() {
                    line.push_str(&format!(" ({})", speaker.affiliations.join(", ")));
                }
                lines.push(line);
                lines.extend(speaker.links.iter().map(|link| match link.url {
                    Some(ref url) => format!("{}{}{}: {}", INDENT, INDENT, link.title, url),
                    None => format!("{}{}{}", INDENT, INDENT, link.title),
                }));
            }
            blocks.push(lines.join("\n"));
        }
        let description = event.description.trim();
        if !description.is_empty() {
            blocks.push(description.to_string());
        }
        blocks.join("\n\n")
    }

    /// Converts one event to the JSON detail view.
    pub fn format_event_detail_json(&self, event: &ConferenceEvent) -> JsonEventDetail {
        JsonEventDetail {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            begin: event.begin.map(|b| self.to_rfc3339(b)),
            end: event.end.map(|e| self.to_rfc3339(e)),
            location: event.location.clone(),
            is_all_day: event.is_all_day(),
            tags: event
                .tags
                .iter()
                .map(|t| JsonEventTag {
                    id: t.id,
                    label: t.label.clone(),
                    category: t.category.display_name().to_string(),
                })
                .collect(),
            speakers: event
                .speakers
                .iter()
                .map(|s| JsonSpeaker {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    title: s.title.clone(),
                    affiliations: s.affiliations.clone(),
                    links: s
                        .links
                        .iter()
                        .map(|l| JsonSpeakerLink {
                            title: l.title.clone(),
                            url: l.url.as_ref().map(|u| u.to_string()),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn format_day_heading(&self, day: DateTime<Utc>) -> String {
        day.with_timezone(&self.tz)
            .format("%A, %B %-d, %Y")
            .to_string()
    }

    fn format_group_header(&self, group: &StartGroup) -> String {
        match group.id {
            StartGroupId::AllDay => ALL_DAY_HEADER.to_string(),
            StartGroupId::At(instant) => self.format_clock(instant),
        }
    }

    fn format_clock(&self, instant: DateTime<Utc>) -> String {
        let sep = &self.options.hour_separator;
        let pattern = match self.options.time_format {
            TimeFormat::H24 => format!("%H{}%M", sep),
            TimeFormat::H12 => format!("%-I{}%M %p", sep),
        };
        instant.with_timezone(&self.tz).format(&pattern).to_string()
    }

    fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.tz)
            .format("%Y-%m-%d")
            .to_string()
    }

    fn to_rfc3339(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz).to_rfc3339()
    }

    fn truncate_title<'a>(&self, title: &'a str) -> Cow<'a, str> {
        match self.options.max_title_length {
            Some(max_len) => ellipsis(title, max_len),
            None => Cow::Borrowed(title),
        }
    }

    fn to_json_event(&self, event: &ConferenceEvent) -> JsonEvent {
        JsonEvent {
            id: event.id.clone(),
            title: self.truncate_title(&event.title).into_owned(),
            begin: event.begin.map(|b| self.to_rfc3339(b)),
            end: event.end.map(|e| self.to_rfc3339(e)),
            location: event.location.clone(),
            category: event.category_tag().map(|t| t.label.clone()),
            detail: event.detail_tag().map(|t| t.label.clone()),
            is_all_day: event.is_all_day(),
            tag_ids: event.tags.iter().map(|t| t.id).collect(),
            speakers: event.speakers.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Truncates a string with ellipsis if it exceeds the given length.
///
/// Lengths count characters. The result never exceeds `max_len`; below four
/// characters there is no room for the ellipsis and the text is cut.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }
    if max_len <= 3 {
        return Cow::Owned(s.chars().take(max_len).collect());
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    Cow::Owned(format!("{}...", truncated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagCategory;
    use chrono::{Duration, TimeZone};
    use chrono_tz::America::Los_Angeles;

    /// 2025-08-08 at `h:min` in Las Vegas (PDT, UTC-7).
    fn vegas(h: i64, min: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 8, 7, 0, 0).unwrap()
            + Duration::hours(h)
            + Duration::minutes(min)
    }

    fn sample_event() -> ConferenceEvent {
        ConferenceEvent::new("1", "Breaking Kubernetes for Fun", "")
            .with_times(vegas(14, 0), vegas(14, 45))
            .with_tag(Tag::new(
                47607,
                TagCategory::EventCategory,
                "DEF CON Official Talk",
                "#5452D4",
                "#FFFFFF",
            ))
            .with_tag(Tag::new(
                48251,
                TagCategory::SubjectMatter,
                "Cloud",
                "#3BEAFA",
                "#ffffff",
            ))
    }

    mod ellipsis_tests {
        use super::*;

        #[test]
        fn short_string_unchanged() {
            assert_eq!(ellipsis("hello", 10), "hello");
            assert_eq!(ellipsis("hello", 5), "hello");
        }

        #[test]
        fn long_string_truncated() {
            assert_eq!(ellipsis("hello world", 8), "hello...");
        }

        #[test]
        fn zero_length() {
            assert_eq!(ellipsis("hello", 0), "");
        }

        #[test]
        fn counts_characters_not_bytes() {
            assert_eq!(ellipsis("Exploit 🪲 demo", 9), "Exploi...");
            assert_eq!(ellipsis("Exploit 🪲 demo", 12), "Exploit 🪲...");
            assert_eq!(ellipsis("🪲🪲🪲🪲🪲", 4), "🪲...");
        }

        #[test]
        fn tiny_limits_never_overflow() {
            assert_eq!(ellipsis("hello world", 1), "h");
            assert_eq!(ellipsis("hello world", 2), "he");
            assert_eq!(ellipsis("hello world", 3), "hel");
            assert_eq!(ellipsis("hello world", 4), "h...");
            for max_len in 0..=12 {
                assert!(ellipsis("hello world", max_len).chars().count() <= max_len);
            }
        }
    }

    mod event_line {
        use super::*;

        #[test]
        fn full_line() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            assert_eq!(
                formatter.format_event_line(&sample_event()),
                "[DEF CON Official Talk] Breaking Kubernetes for Fun · 14:00–14:45 · Cloud"
            );
        }

        #[test]
        fn without_detail_and_category() {
            let options = FormatOptions {
                show_detail_tag: false,
                ..Default::default()
            };
            let formatter = OutputFormatter::new(options, Los_Angeles);
            let event = sample_event().with_tags(vec![]);
            assert_eq!(
                formatter.format_event_line(&event),
                "Breaking Kubernetes for Fun · 14:00–14:45"
            );
        }

        #[test]
        fn truncated_title() {
            let options = FormatOptions {
                max_title_length: Some(11),
                show_detail_tag: false,
                ..Default::default()
            };
            let formatter = OutputFormatter::new(options, Los_Angeles);
            let event = sample_event().with_tags(vec![]);
            assert_eq!(
                formatter.format_event_line(&event),
                "Breaking... · 14:00–14:45"
            );
        }
    }

    mod time_range {
        use super::*;

        #[test]
        fn twelve_hour_clock() {
            let options = FormatOptions {
                time_format: TimeFormat::H12,
                ..Default::default()
            };
            let formatter = OutputFormatter::new(options, Los_Angeles);
            assert_eq!(
                formatter.format_time_range(&sample_event()).as_deref(),
                Some("2:00 PM–2:45 PM")
            );
        }

        #[test]
        fn custom_separator() {
            let options = FormatOptions {
                hour_separator: "h".to_string(),
                ..Default::default()
            };
            let formatter = OutputFormatter::new(options, Los_Angeles);
            assert_eq!(
                formatter.format_time_range(&sample_event()).as_deref(),
                Some("14h00–14h45")
            );
        }

        #[test]
        fn end_only_and_none() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            let end_only = ConferenceEvent::new("e", "e", "").with_end(vegas(18, 5));
            assert_eq!(
                formatter.format_time_range(&end_only).as_deref(),
                Some("ends 18:05")
            );
            let begin_only = ConferenceEvent::new("b", "b", "").with_begin(vegas(9, 0));
            assert!(formatter.format_time_range(&begin_only).is_none());
        }
    }

    mod json {
        use super::*;
        use crate::schedule::build_schedule;

        #[test]
        fn schedule_json_uses_reference_timezone() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            let days = build_schedule(&[sample_event()], &Los_Angeles);
            let json = formatter.format_schedule_json(&days);

            assert_eq!(json.len(), 1);
            assert_eq!(json[0].date, "2025-08-08");
            assert_eq!(json[0].start, "2025-08-08T00:00:00-07:00");
            let group = &json[0].groups[0];
            assert!(!group.all_day);
            assert_eq!(group.start.as_deref(), Some("2025-08-08T14:00:00-07:00"));
            assert_eq!(group.events[0].category.as_deref(), Some("DEF CON Official Talk"));
            assert_eq!(group.events[0].detail.as_deref(), Some("Cloud"));
            assert_eq!(group.events[0].tag_ids, vec![47607, 48251]);
        }

        #[test]
        fn optional_fields_skipped() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            let event = ConferenceEvent::new("x", "Untimed", "");
            let json = serde_json::to_string(&formatter.to_json_event(&event)).unwrap();
            assert!(!json.contains("begin"));
            assert!(!json.contains("location"));
            assert!(!json.contains("category"));
            assert!(json.contains("\"is_all_day\":false"));
        }
    }

    mod detail {
        use super::*;
        use crate::event::{Speaker, SpeakerLink};
        use url::Url;

        fn detailed_event() -> ConferenceEvent {
            sample_event()
                .with_location("LVCC - L1 - HW1-11-01")
                .with_speaker(
                    Speaker::new("7", "Alice Example")
                        .with_title("Staff Engineer")
                        .with_affiliation("Acme")
                        .with_link(SpeakerLink::new(
                            "Website",
                            Some(Url::parse("https://example.com/").unwrap()),
                        ))
                        .with_link(SpeakerLink::new("Mastodon", None)),
                )
        }

        #[test]
        fn text_view() {
            let formatter = OutputFormatter::new(
                FormatOptions {
                    max_title_length: Some(5),
                    ..Default::default()
                },
                Los_Angeles,
            );
            let event = ConferenceEvent {
                description: "  Pods, *nodes* and\nclusters.\n".to_string(),
                ..detailed_event()
            };
            assert_eq!(
                formatter.format_event_detail(&event),
                "Breaking Kubernetes for Fun\n\
                 Friday, August 8, 2025 · 14:00–14:45\n\
                 \n\
                 Tags:\n\
                 \x20 DEF CON Official Talk (Event Category)\n\
                 \x20 Cloud (Subject Matter)\n\
                 \n\
                 Location: LVCC - L1 - HW1-11-01\n\
                 \n\
                 Speakers:\n\
                 \x20 Alice Example, Staff Engineer (Acme)\n\
                 \x20   Website: https://example.com/\n\
                 \x20   Mastodon\n\
                 \n\
                 Pods, *nodes* and\nclusters."
            );
        }

        #[test]
        fn bare_event() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            let event = ConferenceEvent::new("x", "Untimed", " ");
            assert_eq!(formatter.format_event_detail(&event), "Untimed");

            let event = ConferenceEvent::new("y", "Closing", "").with_end(vegas(18, 0));
            assert_eq!(formatter.format_event_detail(&event), "Closing\nends 18:00");
        }

        #[test]
        fn json_view() {
            let formatter = OutputFormatter::with_defaults(Los_Angeles);
            let event = ConferenceEvent {
                description: "Pods.".to_string(),
                ..detailed_event()
            };
            let json = serde_json::to_value(formatter.format_event_detail_json(&event)).unwrap();

            assert_eq!(json["description"], "Pods.");
            assert_eq!(json["begin"], "2025-08-08T14:00:00-07:00");
            assert_eq!(json["location"], "LVCC - L1 - HW1-11-01");
            assert_eq!(json["tags"][1]["label"], "Cloud");
            assert_eq!(json["tags"][1]["category"], "Subject Matter");
            let speaker = &json["speakers"][0];
            assert_eq!(speaker["title"], "Staff Engineer");
            assert_eq!(speaker["affiliations"][0], "Acme");
            assert_eq!(speaker["links"][0]["url"], "https://example.com/");
            assert!(speaker["links"][1].get("url").is_none());
        }
    }

    #[test]
    fn empty_outputs() {
        let formatter = OutputFormatter::with_defaults(Los_Angeles);
        assert_eq!(formatter.format_schedule(&[]), "No events");
        assert_eq!(formatter.format_search(&[]), "No events");
        assert_eq!(formatter.format_tags(&[]), "No tags");
    }
}
