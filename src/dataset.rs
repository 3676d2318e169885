use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::constants::FESTIVAL_DAYS;
use crate::logging::log;
use crate::models::{Performance, Stage, TimetableData};
use crate::time::parse_clock_time;

/// Why the timetable could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("Malformed timetable JSON: {0}")]
    Json(String),
    #[error("Timetable is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("Performance {id} has an invalid time {value:?}")]
    InvalidTime { id: String, value: String },
    #[error("Performance {id} is scheduled on unknown day {day}")]
    InvalidDay { id: String, day: u8 },
}

/// Performance as it appears on the wire, before time validation
#[derive(Debug, Deserialize)]
struct RawPerformance {
    id: String,
    artist: String,
    stage: String,
    day: u8,
    date: String,
    start_time: String,
    end_time: String,
}

impl TryFrom<RawPerformance> for Performance {
    type Error = LoadError;

    fn try_from(raw: RawPerformance) -> Result<Self, Self::Error> {
        if !FESTIVAL_DAYS.contains(&raw.day) {
            return Err(LoadError::InvalidDay { id: raw.id, day: raw.day });
        }
        let Ok(start_time) = parse_clock_time(&raw.start_time) else {
            return Err(LoadError::InvalidTime { id: raw.id, value: raw.start_time });
        };
        let Ok(end_time) = parse_clock_time(&raw.end_time) else {
            return Err(LoadError::InvalidTime { id: raw.id, value: raw.end_time });
        };

        Ok(Self {
            id: raw.id,
            artist: raw.artist,
            stage: raw.stage,
            day: raw.day,
            date: raw.date,
            start_time,
            end_time,
        })
    }
}

fn take_field(root: &mut serde_json::Map<String, Value>, field: &'static str) -> Result<Value, LoadError> {
    root.remove(field).ok_or(LoadError::MissingField(field))
}

/// Parse and validate a timetable document
///
/// # Errors
///
/// Returns an error if the text is not JSON, either top-level key is absent,
/// a record does not have the documented shape, a time is not HH:MM, or a
/// day is outside the festival.
pub fn parse_timetable(json: &str) -> Result<TimetableData, LoadError> {
    let value: Value = serde_json::from_str(json).map_err(|e| LoadError::Json(e.to_string()))?;
    let Value::Object(mut root) = value else {
        return Err(LoadError::Json("expected a JSON object at the top level".to_string()));
    };

    let raw_performances = take_field(&mut root, "performances")?;
    let raw_stages = take_field(&mut root, "stages")?;

    let raw_performances: Vec<RawPerformance> =
        serde_json::from_value(raw_performances).map_err(|e| LoadError::Json(format!("performances: {e}")))?;
    let stages: Vec<Stage> =
        serde_json::from_value(raw_stages).map_err(|e| LoadError::Json(format!("stages: {e}")))?;

    let mut seen = HashSet::new();
    let mut performances = Vec::with_capacity(raw_performances.len());
    for raw in raw_performances {
        let performance = Performance::try_from(raw)?;
        if !seen.insert(performance.id.clone()) {
            leptos::logging::warn!("Dropping duplicate performance id {}", performance.id);
            continue;
        }
        if performance.time_range().is_empty() {
            leptos::logging::warn!(
                "Performance {} ends before it starts ({}), treating as zero length",
                performance.id,
                performance.time_label()
            );
        }
        performances.push(performance);
    }

    log!("Loaded timetable: {} performances on {} stages", performances.len(), stages.len());

    Ok(TimetableData::new(performances, stages))
}

#[cfg(target_arch = "wasm32")]
fn absolute_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map_or_else(|| path.to_string(), |origin| format!("{origin}{path}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn absolute_url(path: &str) -> String {
    path.to_string()
}

/// Fetch and validate the timetable document from `path`
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The body fails [`parse_timetable`]
pub async fn fetch_timetable(path: &str) -> Result<TimetableData, LoadError> {
    let response = reqwest::get(absolute_url(path))
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http { status: status.as_u16() });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_timetable(&body)
}
