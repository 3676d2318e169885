use serde::{Deserialize, Serialize};
use super::{Performance, Stage};

/// The whole dataset, loaded once and read-only for the session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimetableData {
    pub performances: Vec<Performance>,
    pub stages: Vec<Stage>,
}

impl TimetableData {
    #[must_use]
    pub fn new(performances: Vec<Performance>, stages: Vec<Stage>) -> Self {
        Self { performances, stages }
    }

    #[must_use]
    pub fn performance(&self, id: &str) -> Option<&Performance> {
        self.performances.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.performance(id).is_some()
    }

    pub fn performances_for_day(&self, day: u8) -> impl Iterator<Item = &Performance> {
        self.performances.iter().filter(move |p| p.day == day)
    }

    /// Calendar date of a festival day, taken from its first performance
    #[must_use]
    pub fn day_date(&self, day: u8) -> Option<&str> {
        self.performances_for_day(day).next().map(|p| p.date.as_str())
    }

    /// Tab label: "Day 1 (2025-07-25)", or "Day 1" when the day has no performances
    #[must_use]
    pub fn day_label(&self, day: u8) -> String {
        match self.day_date(day) {
            Some(date) => format!("Day {day} ({date})"),
            None => format!("Day {day}"),
        }
    }
}
