use std::fmt::Write as _;

use wasm_bindgen::JsCast;

use crate::models::{sort_chronologically, Performance, TimetableData};
use crate::schedule::{day_schedule, resolve_selection};

const TITLE_RULE: &str = "==========================================";
const DAY_RULE: &str = "-------------------";

/// "Day 1 (2025-07-25)"
#[must_use]
pub fn day_header(performance: &Performance) -> String {
    format!("Day {} ({})", performance.day, performance.date)
}

/// "19:00 - 20:00 | Artist @ GREEN STAGE"
#[must_use]
pub fn export_line(performance: &Performance) -> String {
    format!(
        "{} | {} @ {}",
        performance.time_label(),
        performance.artist,
        performance.stage
    )
}

/// Plain-text export of the personal selection, grouped by day.
///
/// Stale ids are skipped; performances are ordered by day then start offset.
#[must_use]
pub fn export_text<'b>(
    data: &TimetableData,
    selected_ids: impl IntoIterator<Item = &'b str>,
    festival_name: &str,
) -> String {
    let mut selected = resolve_selection(data, selected_ids);
    sort_chronologically(&mut selected);

    let mut text = format!("{festival_name} - My Timetable\n{TITLE_RULE}\n\n");
    let mut current_day = None;
    for performance in selected {
        if current_day != Some(performance.day) {
            current_day = Some(performance.day);
            let _ = write!(text, "\n{}\n{DAY_RULE}\n", day_header(performance));
        }
        let _ = writeln!(text, "{}", export_line(performance));
    }
    text
}

/// One row of the shareable day summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLine {
    pub start: String,
    pub end: String,
    pub artist: String,
    pub stage: String,
}

/// Input for the shareable image of one day's selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub title: String,
    pub lines: Vec<ShareLine>,
}

/// Ordered, stale-free selection of one day, ready to be drawn
#[must_use]
pub fn share_card<'b>(
    data: &TimetableData,
    selected_ids: impl IntoIterator<Item = &'b str>,
    day: u8,
    festival_name: &str,
) -> ShareCard {
    let schedule = day_schedule(data, selected_ids, day);
    let title = match data.day_date(day) {
        Some(date) => format!("{festival_name} · Day {day} ({date})"),
        None => format!("{festival_name} · Day {day}"),
    };
    let lines = schedule
        .iter()
        .map(|p| ShareLine {
            start: p.start_label(),
            end: p.end_label(),
            artist: p.artist.clone(),
            stage: p.stage.clone(),
        })
        .collect();
    ShareCard { title, lines }
}

/// Trigger a browser download of `text` as a plain-text file
///
/// # Errors
/// Returns an error if blob creation, URL generation, or DOM manipulation fails
pub fn download_text(text: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(text));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type("text/plain");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &blob_options)
        .map_err(|_| "Failed to create blob")?;

    let window = web_sys::window().ok_or("No window available")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL")?;

    let document = window.document().ok_or("No document available")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create anchor element")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast to anchor element")?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
