use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use crate::time::{clock_format, format_clock_time, session_offset, to_minute_offset, TimeRange};

/// One scheduled artist slot on one stage during one festival day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub id: String,
    pub artist: String,
    pub stage: String,
    pub day: u8,
    pub date: String,
    #[serde(with = "clock_format")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_format")]
    pub end_time: NaiveTime,
}

impl Performance {
    /// Absolute half-open interval of the performance, midnight continuation applied
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(
            to_minute_offset(self.day, self.start_time),
            to_minute_offset(self.day, self.end_time),
        )
    }

    /// Minutes from this day's 10:00 anchor to the start
    #[must_use]
    pub fn start_offset(&self) -> i32 {
        session_offset(self.start_time)
    }

    /// Minutes from this day's 10:00 anchor to the end, never before the start
    #[must_use]
    pub fn end_offset(&self) -> i32 {
        session_offset(self.end_time).max(self.start_offset())
    }

    #[must_use]
    pub fn start_label(&self) -> String {
        format_clock_time(self.start_time)
    }

    #[must_use]
    pub fn end_label(&self) -> String {
        format_clock_time(self.end_time)
    }

    /// "HH:MM - HH:MM"
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start_label(), self.end_label())
    }

    /// Chronological ordering key: day, start, end, then id for a stable tie-break
    #[must_use]
    pub fn chronological_key(&self) -> (u8, i32, i32, &str) {
        (self.day, self.start_offset(), self.end_offset(), self.id.as_str())
    }

    #[must_use]
    pub fn matches_artist(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty() || self.artist.to_lowercase().contains(needle_lowercase)
    }
}

/// Sort performances into festival order using the minute-offset rule
pub fn sort_chronologically(performances: &mut [&Performance]) {
    performances.sort_by(|a, b| a.chronological_key().cmp(&b.chronological_key()));
}
