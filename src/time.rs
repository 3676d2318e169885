use chrono::{NaiveTime, Timelike};
use crate::constants::{DAY_ANCHOR, MIDNIGHT_CONTINUATION_END_HOUR, MINUTES_PER_DAY};

/// Parse a wall-clock string in HH:MM format
///
/// # Errors
///
/// Returns an error if the string is not a valid time in HH:MM format.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
}

/// Format a time back into the HH:MM form used by the dataset
#[must_use]
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Hour of the festival session a wall-clock time belongs to.
///
/// Early-morning times continue the previous evening, so 01:00 is hour 25.
#[must_use]
pub fn session_hour(time: NaiveTime) -> u32 {
    let hour = time.hour();
    if hour < MIDNIGHT_CONTINUATION_END_HOUR {
        hour + 24
    } else {
        hour
    }
}

/// Minutes from the day anchor (10:00) to `time` within one session.
///
/// Times between 06:00 and the anchor come out negative.
#[must_use]
pub fn session_offset(time: NaiveTime) -> i32 {
    #[allow(clippy::cast_possible_wrap)]
    let session_minutes = (session_hour(time) * 60 + time.minute()) as i32;
    #[allow(clippy::cast_possible_wrap)]
    let anchor_minutes = (DAY_ANCHOR.hour() * 60 + DAY_ANCHOR.minute()) as i32;
    session_minutes - anchor_minutes
}

/// Absolute minute offset of `time` on festival `day`, counted from the day-1 anchor.
///
/// Every ordering and overlap decision goes through this function so the
/// midnight continuation rule is applied the same way everywhere.
#[must_use]
pub fn to_minute_offset(day: u8, time: NaiveTime) -> i32 {
    (i32::from(day) - 1) * MINUTES_PER_DAY + session_offset(time)
}

/// Half-open interval `[start, end)` of absolute minute offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: i32,
    pub end: i32,
}

impl TimeRange {
    /// Build a range; an end that is not after the start collapses to an empty range
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end: end.max(start) }
    }

    #[must_use]
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Two ranges overlap iff `s1 < e2 && e1 > s2`; touching boundaries do not count
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.end && self.end > other.start
    }
}

/// Serde adapter for `NaiveTime` fields stored as "HH:MM" strings
pub mod clock_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock_time(*time))
    }

    /// # Errors
    ///
    /// Fails if the string is not a valid HH:MM time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_clock_time(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_clock_time(s).expect("valid time")
    }

    #[test]
    fn test_parse_clock_time_valid() {
        let time = t("18:45");
        assert_eq!(time.hour(), 18);
        assert_eq!(time.minute(), 45);
    }

    #[test]
    fn test_parse_clock_time_rejects_seconds_and_garbage() {
        assert!(parse_clock_time("18:45:00").is_err());
        assert!(parse_clock_time("25:00").is_err());
        assert!(parse_clock_time("").is_err());
        assert!(parse_clock_time("noon").is_err());
    }

    #[test]
    fn test_format_clock_time_zero_pads() {
        assert_eq!(format_clock_time(t("01:05")), "01:05");
    }

    #[test]
    fn test_session_hour_midnight_continuation() {
        assert_eq!(session_hour(t("00:00")), 24);
        assert_eq!(session_hour(t("05:59")), 29);
        assert_eq!(session_hour(t("06:00")), 6);
        assert_eq!(session_hour(t("23:00")), 23);
    }

    #[test]
    fn test_session_offset_from_anchor() {
        assert_eq!(session_offset(t("10:00")), 0);
        assert_eq!(session_offset(t("11:30")), 90);
        assert_eq!(session_offset(t("01:00")), 15 * 60);
        assert_eq!(session_offset(t("08:00")), -120);
    }

    #[test]
    fn test_post_midnight_sorts_after_late_evening() {
        assert!(to_minute_offset(1, t("01:00")) > to_minute_offset(1, t("23:00")));
    }

    #[test]
    fn test_later_day_sorts_after_previous_session() {
        assert!(to_minute_offset(2, t("10:00")) > to_minute_offset(1, t("05:30")));
    }

    #[test]
    fn test_range_half_open_boundary() {
        let a = TimeRange::new(0, 60);
        let b = TimeRange::new(60, 120);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_range_overlap_is_symmetric() {
        let a = TimeRange::new(0, 90);
        let b = TimeRange::new(60, 120);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_inverted_range_is_empty_and_never_overlaps() {
        let inverted = TimeRange::new(100, 20);
        assert!(inverted.is_empty());
        assert_eq!(inverted.duration_minutes(), 0);
        assert!(!inverted.overlaps(&TimeRange::new(0, 500)));
    }
}
