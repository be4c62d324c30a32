//! Mapping from Firestore documents to [`ConferenceEvent`]s.

use chrono::{DateTime, Utc};
use confsched_core::{ConferenceEvent, Speaker, SpeakerLink, TagCatalog};
use tracing::{debug, trace};
use url::Url;

use super::value::{Document, MapValue, QueryResponse, Value};
use crate::error::ProviderResult;

/// Decodes a `runQuery` response body into events.
///
/// The whole body must be well formed; a single malformed value fails the
/// decode. Documents missing a required field are skipped individually.
pub fn decode_response(body: &str, catalog: &TagCatalog) -> ProviderResult<Vec<ConferenceEvent>> {
    let responses: Vec<QueryResponse> = serde_json::from_str(body)?;
    let total = responses.len();

    let events: Vec<ConferenceEvent> = responses
        .iter()
        .filter_map(|r| r.document.as_ref())
        .filter_map(|doc| document_to_event(doc, catalog))
        .collect();

    debug!(
        responses = total,
        events = events.len(),
        "decoded firestore response"
    );
    Ok(events)
}

/// Converts one document into an event.
///
/// Returns `None` when `title` or `description` is missing.
pub fn document_to_event(doc: &Document, catalog: &TagCatalog) -> Option<ConferenceEvent> {
    let (Some(title), Some(description)) = (
        doc.field("title").and_then(Value::as_str),
        doc.field("description").and_then(Value::as_str),
    ) else {
        trace!(id = doc.id(), "skipping document without title or description");
        return None;
    };

    let mut event = ConferenceEvent::new(doc.id(), title, description);
    event.begin = doc.field("begin_tsz").and_then(parse_timestamp);
    event.end = doc.field("end_tsz").and_then(parse_timestamp);
    event.location = doc
        .field("location")
        .and_then(Value::as_map)
        .and_then(|m| m.field("name"))
        .and_then(Value::as_str)
        .map(String::from);
    event.speakers = doc
        .field("speakers")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(decode_speaker).collect())
        .unwrap_or_default();

    let tag_ids = doc
        .field("tag_ids")
        .and_then(Value::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_i64)
        .filter_map(|id| u32::try_from(id).ok());
    event.tags = catalog.resolve(tag_ids);

    Some(event)
}

/// Parses an RFC 3339 `stringValue`; anything else is treated as absent.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            trace!(value = raw, error = %e, "ignoring unparseable timestamp");
            None
        }
    }
}

/// Decodes a speaker map; `id` (integer) and `name` are required.
fn decode_speaker(value: &Value) -> Option<Speaker> {
    let fields = value.as_map()?;
    let id = fields.field("id").and_then(Value::as_i64)?;
    let name = fields.field("name").and_then(Value::as_str)?;

    let mut speaker = Speaker::new(id.to_string(), name);
    speaker.affiliations = array_field(fields, "affiliations")
        .iter()
        .filter_map(Value::as_map)
        .filter_map(|m| m.field("title").and_then(Value::as_str))
        .map(String::from)
        .collect();
    speaker.links = array_field(fields, "links")
        .iter()
        .filter_map(decode_link)
        .collect();
    speaker.title = fields
        .field("title")
        .and_then(Value::as_str)
        .map(String::from);
    Some(speaker)
}

/// Decodes a speaker link; `title` is required, a bad `url` becomes absent.
fn decode_link(value: &Value) -> Option<SpeakerLink> {
    let fields = value.as_map()?;
    let title = fields.field("title").and_then(Value::as_str)?;
    let url = fields
        .field("url")
        .and_then(Value::as_str)
        .and_then(|raw| Url::parse(raw).ok());
    Some(SpeakerLink::new(title, url))
}

fn array_field<'a>(map: &'a MapValue, name: &str) -> &'a [Value] {
    map.field(name).and_then(Value::as_array).unwrap_or_default()
}
