//! Turns raw model output into an [`Itinerary`], whatever shape it arrives in.
//!
//! Parsing never fails: text that is not JSON becomes a one-day placeholder
//! carrying the raw text, and JSON of the wrong shape is coerced into a
//! sequence of days with placeholder values for anything missing.

use serde_json::{json, Value};
use tracing::debug;

use crate::types::{Activity, Day, Itinerary, UNKNOWN_PLACE};

const FALLBACK_TIME: &str = "All day";
const PLACEHOLDER_TIME: &str = "All Day";
const PLACEHOLDER_PLACE: &str = "Unknown";
const PLACEHOLDER_CATEGORY: &str = "Sightseeing";
const INVALID_FORMAT_MESSAGE: &str = "Invalid response format.";

/// Outcome of strict JSON parsing of a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    /// The cleaned text was valid JSON (of any shape)
    Structured(Value),
    /// The text was not JSON; holds the original reply verbatim
    Unparseable(String),
}

impl ParsedResponse {
    pub fn is_structured(&self) -> bool {
        matches!(self, ParsedResponse::Structured(_))
    }

    /// JSON view of the reply, substituting the one-day fallback for unparseable text.
    pub fn into_value(self) -> Value {
        match self {
            ParsedResponse::Structured(value) => value,
            ParsedResponse::Unparseable(raw) => json!([{
                "day": 1,
                "activities": [{
                    "time": FALLBACK_TIME,
                    "place_name": PLACEHOLDER_PLACE,
                    "description": raw
                }],
                "notes": ""
            }]),
        }
    }
}

/// Remove markdown code fences (```` ``` ```` and ```` ```json ````) and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strictly parse a model reply after stripping code fences.
pub fn parse_llm_json(text: &str) -> ParsedResponse {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => ParsedResponse::Structured(value),
        Err(err) => {
            debug!(
                target: "trip_planner::normalize",
                error = %err,
                "model reply is not valid JSON; using raw text"
            );
            ParsedResponse::Unparseable(text.to_string())
        }
    }
}

/// Force any JSON value into a sequence of days.
///
/// A single object is wrapped, a string becomes a placeholder activity
/// holding that text, and any other non-array becomes a placeholder that
/// reports the format problem.
pub fn coerce_itinerary(value: Value) -> Itinerary {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| day_from_value(item, idx))
            .collect::<Vec<_>>()
            .into(),
        Value::Object(_) => Itinerary::new(vec![day_from_value(value, 0)]),
        Value::String(text) => placeholder_itinerary(text),
        other => {
            debug!(
                target: "trip_planner::normalize",
                payload = %other,
                "unexpected top-level JSON shape"
            );
            placeholder_itinerary(INVALID_FORMAT_MESSAGE.to_string())
        }
    }
}

/// Parse and coerce in one step. Total: every input yields an itinerary.
pub fn normalize_response(text: &str) -> Itinerary {
    coerce_itinerary(parse_llm_json(text).into_value())
}

fn placeholder_itinerary(description: String) -> Itinerary {
    Itinerary::new(vec![Day::new(
        1,
        vec![Activity::new(
            PLACEHOLDER_TIME,
            PLACEHOLDER_PLACE,
            PLACEHOLDER_CATEGORY,
            description,
        )],
        "",
    )])
}

/// Decode one element of the day sequence. `idx` is its position, used when
/// the element carries no usable day number.
fn day_from_value(value: Value, idx: usize) -> Day {
    let position = u32::try_from(idx + 1).unwrap_or(u32::MAX);

    let raw = value.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let strict: Result<Day, _> = serde_path_to_error::deserialize(&mut deserializer);
    match strict {
        Ok(day) if day.day > 0 => return day,
        Ok(_) => {}
        Err(err) => {
            let mut path = err.path().to_string();
            if path.is_empty() || path == "." {
                path = "<root>".to_string();
            }
            debug!(
                target: "trip_planner::normalize",
                day = position,
                path = %path,
                error = %err.inner(),
                "lenient decode of day"
            );
        }
    }

    match value {
        Value::Object(map) => {
            let day = map
                .get("day")
                .and_then(number_from_value)
                .filter(|day| *day > 0)
                .unwrap_or(position);
            let activities = map
                .get("activities")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(activity_from_value).collect())
                .unwrap_or_default();
            let notes = map.get("notes").map(text_from_value).unwrap_or_default();
            Day::new(day, activities, notes)
        }
        Value::String(text) => Day::new(
            position,
            vec![Activity::new(
                PLACEHOLDER_TIME,
                PLACEHOLDER_PLACE,
                PLACEHOLDER_CATEGORY,
                text,
            )],
            "",
        ),
        _ => Day::new(position, Vec::new(), ""),
    }
}

fn activity_from_value(value: &Value) -> Activity {
    match value {
        Value::Object(map) => {
            let field = |key: &str| map.get(key).map(text_from_value).unwrap_or_default();
            let place_name = field("place_name");
            Activity::new(
                field("time"),
                if place_name.is_empty() {
                    UNKNOWN_PLACE.to_string()
                } else {
                    place_name
                },
                field("category"),
                field("description"),
            )
        }
        other => Activity::new("", UNKNOWN_PLACE, "", text_from_value(other)),
    }
}

fn number_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn text_from_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
