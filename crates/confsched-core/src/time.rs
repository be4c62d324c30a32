//! Reference-timezone helpers.
//!
//! All day and start-time bucketing happens in a single reference timezone
//! that is passed explicitly to every grouping call. This module provides
//! the two bucketing keys ([`day_start`] and [`minute_start`]) and the
//! [`StartGroupId`] used to label start-time groups.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Error returned when a timezone identifier is not a known IANA zone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown timezone: {0}")]
pub struct TimezoneError(pub String);

/// Parses an IANA timezone identifier such as `America/Los_Angeles`.
pub fn parse_timezone(name: &str) -> Result<chrono_tz::Tz, TimezoneError> {
    name.trim()
        .parse::<chrono_tz::Tz>()
        .map_err(|_| TimezoneError(name.to_string()))
}

/// Identifier of a start-time group within a day.
///
/// `AllDay` orders before every `At(_)`, so sorting group ids puts the
/// all-day bucket first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StartGroupId {
    /// The bucket of long-running events.
    AllDay,
    /// Events starting at this minute.
    At(DateTime<Utc>),
}

impl StartGroupId {
    /// Returns true for the all-day bucket.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Returns the start instant, if this is a timed group.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::AllDay => None,
            Self::At(instant) => Some(*instant),
        }
    }
}

/// Returns the instant of local midnight, in `tz`, of the civil day that
/// contains `instant`.
///
/// If midnight is skipped by a DST transition the first valid instant of the
/// day is returned; if it is repeated the earlier one is.
pub fn day_start<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let date = instant.with_timezone(tz).date_naive();
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Truncates `instant` to the start of its minute in `tz`.
///
/// The local seconds and sub-seconds are removed from the instant itself,
/// which keeps the result on the correct side of a repeated (fall-back)
/// hour.
pub fn minute_start<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let local = instant.with_timezone(tz);
    instant
        - Duration::seconds(i64::from(local.second()))
        - Duration::nanoseconds(i64::from(local.nanosecond()))
}

/// Maps a local wall-clock time to an instant.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Walk forward out of the gap one minute at a time.
            let mut probe = local;
            for _ in 0..24 * 60 {
                probe += Duration::minutes(1);
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt.with_timezone(&Utc);
                }
            }
            local.and_utc()
        }
    }
}
