//! Core types: tag catalog, events, schedule grouping, search, formatting

pub mod event;
pub mod format;
pub mod schedule;
pub mod search;
pub mod suggest;
pub mod tags;
pub mod time;
pub mod tracing;

pub use event::{ConferenceEvent, Speaker, SpeakerLink, sort_events};
pub use format::{
    FormatOptions, JsonDay, JsonEvent, JsonEventDetail, JsonEventTag, JsonGroup, JsonSection,
    JsonSpeaker, JsonSpeakerLink, OutputFormat, OutputFormatter, TimeFormat, ellipsis,
};
pub use schedule::{ScheduleDay, StartGroup, build_schedule};
pub use search::{SearchQuery, SearchSection, search};
pub use suggest::suggest_tags;
pub use tags::{CatalogError, Rgb, Tag, TagCatalog, TagCategory, TagGroup, parse_hex_color};
pub use time::{DEFAULT_TIMEZONE, StartGroupId, TimezoneError, day_start, minute_start, parse_timezone};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
