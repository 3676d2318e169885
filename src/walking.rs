use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::{DEFAULT_WALKING_MINUTES, LONG_WALK_MINUTES};
use crate::models::{Performance, FIELD_OF_HEAVEN, GREEN_STAGE, RED_MARQUEE, WHITE_STAGE};

/// Official walking times between the main stages, one entry per unordered pair
pub const FESTIVAL_WALKING_TIMES: [(&str, &str, u32); 6] = [
    (GREEN_STAGE, WHITE_STAGE, 10),
    (GREEN_STAGE, RED_MARQUEE, 4),
    (GREEN_STAGE, FIELD_OF_HEAVEN, 15),
    (WHITE_STAGE, RED_MARQUEE, 14),
    (WHITE_STAGE, FIELD_OF_HEAVEN, 5),
    (RED_MARQUEE, FIELD_OF_HEAVEN, 19),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkingTableError {
    #[error("walking time {from} -> {to} is {forward} min but {to} -> {from} is {backward} min")]
    Asymmetric {
        from: String,
        to: String,
        forward: u32,
        backward: u32,
    },
}

/// Symmetric lookup of walking minutes between stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkingTable {
    minutes: HashMap<(String, String), u32>,
    default_minutes: u32,
}

impl WalkingTable {
    /// Build from unordered pairs; each pair is stored in both directions
    #[must_use]
    pub fn symmetric(pairs: &[(&str, &str, u32)], default_minutes: u32) -> Self {
        let mut minutes = HashMap::with_capacity(pairs.len() * 2);
        for &(a, b, m) in pairs {
            minutes.insert((a.to_string(), b.to_string()), m);
            minutes.insert((b.to_string(), a.to_string()), m);
        }
        Self { minutes, default_minutes }
    }

    /// Build from entries that list each direction separately.
    ///
    /// A direction listed only once is mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if both directions of a pair are listed with different values.
    pub fn from_directed(entries: &[(&str, &str, u32)], default_minutes: u32) -> Result<Self, WalkingTableError> {
        let mut minutes: HashMap<(String, String), u32> = HashMap::with_capacity(entries.len() * 2);
        for &(from, to, m) in entries {
            minutes.insert((from.to_string(), to.to_string()), m);
        }

        let mut mirrored = Vec::new();
        for ((from, to), &forward) in &minutes {
            match minutes.get(&(to.clone(), from.clone())) {
                Some(&backward) if backward != forward => {
                    return Err(WalkingTableError::Asymmetric {
                        from: from.clone(),
                        to: to.clone(),
                        forward,
                        backward,
                    });
                }
                Some(_) => {}
                None => mirrored.push(((to.clone(), from.clone()), forward)),
            }
        }
        minutes.extend(mirrored);

        Ok(Self { minutes, default_minutes })
    }

    /// The table for the festival site
    #[must_use]
    pub fn festival() -> Self {
        Self::symmetric(&FESTIVAL_WALKING_TIMES, DEFAULT_WALKING_MINUTES)
    }

    /// Zero for the same stage, the tabulated value for a known pair, the default otherwise
    #[must_use]
    pub fn minutes(&self, from_stage: &str, to_stage: &str) -> u32 {
        if from_stage == to_stage {
            return 0;
        }
        self.minutes
            .get(&(from_stage.to_string(), to_stage.to_string()))
            .copied()
            .unwrap_or(self.default_minutes)
    }

    #[must_use]
    pub fn contains_pair(&self, from_stage: &str, to_stage: &str) -> bool {
        self.minutes.contains_key(&(from_stage.to_string(), to_stage.to_string()))
    }
}

/// Shared festival table, built on first use
#[must_use]
pub fn festival_table() -> &'static WalkingTable {
    static TABLE: OnceLock<WalkingTable> = OnceLock::new();
    TABLE.get_or_init(WalkingTable::festival)
}

/// Walking minutes between two festival stages
#[must_use]
pub fn walking_minutes(from_stage: &str, to_stage: &str) -> u32 {
    festival_table().minutes(from_stage, to_stage)
}

/// How strenuous a walk between two stages is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDifficulty {
    SameStage,
    Hard,
    Medium,
    Nice,
    Easy,
    Normal,
    Unknown,
}

impl RouteDifficulty {
    /// Classification is direction-independent
    #[must_use]
    pub fn classify(from_stage: &str, to_stage: &str) -> Self {
        if from_stage == to_stage {
            return Self::SameStage;
        }
        let pair = if from_stage <= to_stage { (from_stage, to_stage) } else { (to_stage, from_stage) };
        match pair {
            (FIELD_OF_HEAVEN, RED_MARQUEE) => Self::Hard,
            (RED_MARQUEE, WHITE_STAGE) | (FIELD_OF_HEAVEN, GREEN_STAGE) => Self::Medium,
            (GREEN_STAGE, WHITE_STAGE) => Self::Nice,
            (GREEN_STAGE, RED_MARQUEE) => Self::Easy,
            (FIELD_OF_HEAVEN, WHITE_STAGE) => Self::Normal,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameStage => "Same stage, take it easy",
            Self::Hard => "Tough walk",
            Self::Medium => "Fairly tough",
            Self::Nice => "Good exercise",
            Self::Easy => "Easy",
            Self::Normal => "Average",
            Self::Unknown => "",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::SameStage => "🏝️",
            Self::Hard => "🥵",
            Self::Medium => "😅",
            Self::Nice => "🚶",
            Self::Easy => "😎",
            Self::Normal => "🤷",
            Self::Unknown => "",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::SameStage => "route-same",
            Self::Hard => "route-hard",
            Self::Medium => "route-medium",
            Self::Nice => "route-nice",
            Self::Easy => "route-easy",
            Self::Normal => "route-normal",
            Self::Unknown => "route-unknown",
        }
    }
}

/// One move between consecutive performances of a personal schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    pub from_id: String,
    pub to_id: String,
    pub from_stage: String,
    pub to_stage: String,
    pub minutes: u32,
    pub difficulty: RouteDifficulty,
    /// Minutes between the end of one performance and the start of the next
    pub gap_minutes: i32,
}

impl RouteLeg {
    #[must_use]
    pub fn is_same_stage(&self) -> bool {
        self.difficulty == RouteDifficulty::SameStage
    }

    /// Long walks are flagged unless the route is already marked as strenuous
    #[must_use]
    pub fn is_long_walk(&self) -> bool {
        self.minutes >= LONG_WALK_MINUTES
            && !matches!(self.difficulty, RouteDifficulty::Hard | RouteDifficulty::Medium)
    }

    /// Whether the walk fits into the break between the two performances
    #[must_use]
    pub fn fits_gap(&self) -> bool {
        i64::from(self.gap_minutes) >= i64::from(self.minutes)
    }
}

/// Legs between consecutive entries of an already sorted schedule
#[must_use]
pub fn route_legs(schedule: &[&Performance], table: &WalkingTable) -> Vec<RouteLeg> {
    schedule
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            RouteLeg {
                from_id: from.id.clone(),
                to_id: to.id.clone(),
                from_stage: from.stage.clone(),
                to_stage: to.stage.clone(),
                minutes: table.minutes(&from.stage, &to.stage),
                difficulty: RouteDifficulty::classify(&from.stage, &to.stage),
                gap_minutes: to.time_range().start - from.time_range().end,
            }
        })
        .collect()
}

#[must_use]
pub fn total_walking_minutes(legs: &[RouteLeg]) -> u32 {
    legs.iter().map(|leg| leg.minutes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::perf;

    const MAIN_STAGES: [&str; 4] = [GREEN_STAGE, WHITE_STAGE, RED_MARQUEE, FIELD_OF_HEAVEN];

    #[test]
    fn test_same_stage_is_zero() {
        for stage in MAIN_STAGES.iter().chain(["PYRAMID GARDEN"].iter()) {
            assert_eq!(walking_minutes(stage, stage), 0);
        }
    }

    #[test]
    fn test_documented_pairs_are_symmetric() {
        for (a, b, m) in FESTIVAL_WALKING_TIMES {
            assert_eq!(walking_minutes(a, b), m);
            assert_eq!(walking_minutes(b, a), m);
        }
    }

    #[test]
    fn test_unlisted_pairs_default_to_ten() {
        assert_eq!(walking_minutes(GREEN_STAGE, "PALACE ARENA"), 10);
        assert_eq!(walking_minutes("PALACE ARENA", "GYPSY AVALON"), 10);
    }

    #[test]
    fn test_green_to_red_is_four() {
        assert_eq!(walking_minutes("GREEN STAGE", "RED MARQUEE"), 4);
    }

    #[test]
    fn test_directed_source_table_matches_symmetric_table() {
        let directed = [
            (GREEN_STAGE, WHITE_STAGE, 10),
            (GREEN_STAGE, RED_MARQUEE, 4),
            (GREEN_STAGE, FIELD_OF_HEAVEN, 15),
            (WHITE_STAGE, GREEN_STAGE, 10),
            (WHITE_STAGE, RED_MARQUEE, 14),
            (WHITE_STAGE, FIELD_OF_HEAVEN, 5),
            (RED_MARQUEE, GREEN_STAGE, 4),
            (RED_MARQUEE, WHITE_STAGE, 14),
            (RED_MARQUEE, FIELD_OF_HEAVEN, 19),
            (FIELD_OF_HEAVEN, GREEN_STAGE, 15),
            (FIELD_OF_HEAVEN, WHITE_STAGE, 5),
            (FIELD_OF_HEAVEN, RED_MARQUEE, 19),
        ];
        let table = WalkingTable::from_directed(&directed, DEFAULT_WALKING_MINUTES).expect("symmetric");
        assert_eq!(table, WalkingTable::festival());
    }

    #[test]
    fn test_asymmetric_entries_are_rejected() {
        let result = WalkingTable::from_directed(&[("A", "B", 3), ("B", "A", 7)], 10);
        assert!(matches!(result, Err(WalkingTableError::Asymmetric { .. })));
    }

    #[test]
    fn test_single_direction_is_mirrored() {
        let table = WalkingTable::from_directed(&[("A", "B", 3)], 10).expect("valid");
        assert_eq!(table.minutes("B", "A"), 3);
        assert!(table.contains_pair("B", "A"));
    }

    #[test]
    fn test_difficulty_is_direction_independent() {
        for a in MAIN_STAGES {
            for b in MAIN_STAGES {
                assert_eq!(RouteDifficulty::classify(a, b), RouteDifficulty::classify(b, a));
            }
        }
        assert_eq!(RouteDifficulty::classify(RED_MARQUEE, FIELD_OF_HEAVEN), RouteDifficulty::Hard);
        assert_eq!(RouteDifficulty::classify(GREEN_STAGE, RED_MARQUEE), RouteDifficulty::Easy);
        assert_eq!(RouteDifficulty::classify(GREEN_STAGE, "OASIS"), RouteDifficulty::Unknown);
    }

    #[test]
    fn test_route_legs_and_total() {
        let green = perf("g", GREEN_STAGE, 1, "19:00", "20:00");
        let red = perf("r", RED_MARQUEE, 1, "20:04", "21:00");
        let heaven = perf("h", FIELD_OF_HEAVEN, 1, "21:10", "22:30");
        let legs = route_legs(&[&green, &red, &heaven], &WalkingTable::festival());
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].minutes, 4);
        assert_eq!(legs[0].gap_minutes, 4);
        assert!(legs[0].fits_gap());
        assert_eq!(legs[1].minutes, 19);
        assert_eq!(legs[1].difficulty, RouteDifficulty::Hard);
        assert!(!legs[1].fits_gap());
        assert!(!legs[1].is_long_walk());
        assert_eq!(total_walking_minutes(&legs), 23);
    }

    #[test]
    fn test_long_walk_warning_for_plain_routes() {
        let table = WalkingTable::symmetric(&[("A", "B", 20)], 10);
        let a = perf("a", "A", 1, "12:00", "13:00");
        let b = perf("b", "B", 1, "14:00", "15:00");
        let legs = route_legs(&[&a, &b], &table);
        assert!(legs[0].is_long_walk());
    }

    #[test]
    fn test_single_performance_has_no_legs() {
        let a = perf("a", GREEN_STAGE, 1, "12:00", "13:00");
        assert!(route_legs(&[&a], &WalkingTable::festival()).is_empty());
        assert_eq!(total_walking_minutes(&[]), 0);
    }
}
