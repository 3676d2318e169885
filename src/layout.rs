use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::constants::{DAY_ANCHOR, MIDNIGHT_CONTINUATION_END_HOUR, MINUTES_PER_HOUR};
use crate::models::Performance;
use chrono::Timelike;

/// Position of one performance block inside its stage column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Pixels from the top of the column (the 10:00 line)
    pub top: f64,
    pub height: f64,
    /// Percent of the column width
    pub left_offset: f64,
    pub width_percent: f64,
}

impl BlockLayout {
    /// Inline style for an absolutely positioned block
    #[must_use]
    pub fn to_style(&self) -> String {
        format!(
            "top: {:.1}px; height: {:.1}px; left: {:.4}%; width: {:.4}%;",
            self.top, self.height, self.left_offset, self.width_percent
        )
    }
}

/// A performance together with its computed block position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPerformance<'a> {
    pub performance: &'a Performance,
    pub layout: BlockLayout,
}

fn lane_key(p: &Performance) -> (i32, &str) {
    (p.time_range().start, p.id.as_str())
}

/// Split performances into lane groups.
///
/// Groups are the connected components of `same_stage_overlap`: if A overlaps B
/// and B overlaps C, all three share one group even when A and C never meet.
/// Each group comes back sorted by (start, id).
#[must_use]
pub fn lane_groups<'a>(performances: &[&'a Performance]) -> Vec<Vec<&'a Performance>> {
    let mut by_stage: BTreeMap<&str, Vec<&'a Performance>> = BTreeMap::new();
    for p in performances {
        by_stage.entry(p.stage.as_str()).or_default().push(p);
    }

    let mut groups = Vec::new();
    for (_, mut column) in by_stage {
        column.sort_by(|a, b| lane_key(a).cmp(&lane_key(b)));

        let mut current: Vec<&'a Performance> = Vec::new();
        let mut current_end = i32::MIN;
        for p in column {
            let range = p.time_range();
            if range.is_empty() {
                groups.push(vec![p]);
                continue;
            }
            if !current.is_empty() && range.start >= current_end {
                groups.push(std::mem::take(&mut current));
            }
            current_end = if current.is_empty() { range.end } else { current_end.max(range.end) };
            current.push(p);
        }
        if !current.is_empty() {
            groups.push(current);
        }
    }
    groups
}

fn vertical_extent(performance: &Performance, config: &LayoutConfig) -> (f64, f64) {
    let start = f64::from(performance.start_offset());
    let end = f64::from(performance.end_offset());
    let per_minute = config.pixels_per_hour / f64::from(MINUTES_PER_HOUR);
    let top = start * per_minute;
    let height = ((end - start) * per_minute).max(config.min_block_height);
    (top, height)
}

fn place<'a>(performance: &'a Performance, lane: usize, lanes: usize, config: &LayoutConfig) -> PlacedPerformance<'a> {
    let (top, height) = vertical_extent(performance, config);
    #[allow(clippy::cast_precision_loss)]
    let width_percent = 100.0 / lanes.max(1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let left_offset = lane as f64 * width_percent;
    PlacedPerformance {
        performance,
        layout: BlockLayout { top, height, left_offset, width_percent },
    }
}

/// Lay out every performance of one or more stage columns.
///
/// Results keep the input order.
#[must_use]
pub fn layout_stage<'a>(performances: &[&'a Performance], config: &LayoutConfig) -> Vec<PlacedPerformance<'a>> {
    let mut placed_by_id: BTreeMap<&str, PlacedPerformance<'a>> = BTreeMap::new();
    for group in lane_groups(performances) {
        let lanes = group.len();
        for (lane, p) in group.into_iter().enumerate() {
            placed_by_id.insert(p.id.as_str(), place(p, lane, lanes, config));
        }
    }

    performances
        .iter()
        .filter_map(|p| placed_by_id.get(p.id.as_str()).copied())
        .collect()
}

/// Lay out a single performance against the other performances on its stage.
///
/// `stage_peers` may or may not contain `performance` itself; peers on other
/// stages are ignored.
#[must_use]
pub fn layout(performance: &Performance, stage_peers: &[&Performance], config: &LayoutConfig) -> BlockLayout {
    let mut column: Vec<&Performance> = stage_peers
        .iter()
        .copied()
        .filter(|p| p.stage == performance.stage && p.id != performance.id)
        .collect();
    column.push(performance);

    lane_groups(&column)
        .into_iter()
        .find_map(|group| {
            let lanes = group.len();
            group
                .iter()
                .position(|p| p.id == performance.id)
                .map(|lane| place(performance, lane, lanes, config).layout)
        })
        .unwrap_or_else(|| place(performance, 0, 1, config).layout)
}

/// Hourly ruler labels from the day anchor through 05:00 the next morning
#[must_use]
pub fn time_slots() -> Vec<String> {
    let evening = DAY_ANCHOR.hour()..24;
    let early_morning = 0..MIDNIGHT_CONTINUATION_END_HOUR;
    evening
        .chain(early_morning)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}

/// Full pixel height of a stage column
#[must_use]
pub fn timeline_height(config: &LayoutConfig) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let slots = time_slots().len() as f64;
    slots * config.pixels_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::perf;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_top_and_height_scale_from_anchor() {
        let p = perf("a", "GREEN STAGE", 1, "12:00", "13:30");
        let l = layout(&p, &[], &config());
        assert!(approx(l.top, 240.0));
        assert!(approx(l.height, 180.0));
        assert!(approx(l.left_offset, 0.0));
        assert!(approx(l.width_percent, 100.0));
    }

    #[test]
    fn test_short_performance_gets_minimum_height() {
        let p = perf("a", "GREEN STAGE", 1, "12:00", "12:15");
        assert!(approx(layout(&p, &[], &config()).height, 60.0));
    }

    #[test]
    fn test_after_midnight_is_placed_below_evening() {
        let p = perf("late", "RED MARQUEE", 1, "01:00", "02:00");
        assert!(approx(layout(&p, &[], &config()).top, 15.0 * 120.0));
    }

    #[test]
    fn test_two_overlapping_split_in_half() {
        let a = perf("a", "GREEN STAGE", 1, "12:00", "13:00");
        let b = perf("b", "GREEN STAGE", 1, "12:30", "13:30");
        let peers = vec![&a, &b];
        let la = layout(&a, &peers, &config());
        let lb = layout(&b, &peers, &config());
        assert!(approx(la.width_percent, 50.0) && approx(la.left_offset, 0.0));
        assert!(approx(lb.width_percent, 50.0) && approx(lb.left_offset, 50.0));
    }

    #[test]
    fn test_touching_performances_keep_full_width() {
        let a = perf("a", "GREEN STAGE", 1, "17:00", "18:00");
        let b = perf("b", "GREEN STAGE", 1, "18:00", "19:00");
        let placed = layout_stage(&[&a, &b], &config());
        assert!(placed.iter().all(|p| approx(p.layout.width_percent, 100.0)));
    }

    #[test]
    fn test_chain_overlap_shares_one_partition() {
        let a = perf("a", "GREEN STAGE", 1, "12:00", "13:00");
        let b = perf("b", "GREEN STAGE", 1, "12:30", "14:00");
        let c = perf("c", "GREEN STAGE", 1, "13:30", "15:00");
        assert!(!crate::conflict::same_stage_overlap(&a, &c));

        let placed = layout_stage(&[&c, &a, &b], &config());
        let ids: Vec<_> = placed.iter().map(|p| p.performance.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        let offsets: Vec<_> = placed.iter().map(|p| p.layout.left_offset).collect();
        assert!(approx(offsets[0], 200.0 / 3.0));
        assert!(approx(offsets[1], 0.0));
        assert!(approx(offsets[2], 100.0 / 3.0));
        assert!(placed.iter().all(|p| approx(p.layout.width_percent, 100.0 / 3.0)));

        let single = layout(&a, &[&b, &c], &config());
        assert!(approx(single.width_percent, 100.0 / 3.0));
    }

    #[test]
    fn test_same_start_ties_break_on_id() {
        let b = perf("b", "WHITE STAGE", 1, "20:00", "21:00");
        let a = perf("a", "WHITE STAGE", 1, "20:00", "21:00");
        let la = layout(&a, &[&b], &config());
        let lb = layout(&b, &[&a], &config());
        assert!(approx(la.left_offset, 0.0));
        assert!(approx(lb.left_offset, 50.0));
    }

    #[test]
    fn test_other_stages_are_ignored() {
        let a = perf("a", "GREEN STAGE", 1, "12:00", "13:00");
        let b = perf("b", "RED MARQUEE", 1, "12:00", "13:00");
        assert!(approx(layout(&a, &[&b], &config()).width_percent, 100.0));
        let placed = layout_stage(&[&a, &b], &config());
        assert!(placed.iter().all(|p| approx(p.layout.width_percent, 100.0)));
    }

    #[test]
    fn test_pixels_per_hour_is_configurable() {
        let p = perf("a", "GREEN STAGE", 1, "11:00", "12:00");
        let custom = LayoutConfig { pixels_per_hour: 60.0, min_block_height: 10.0 };
        let l = layout(&p, &[], &custom);
        assert!(approx(l.top, 60.0));
        assert!(approx(l.height, 60.0));
    }

    #[test]
    fn test_time_slots_run_from_anchor_to_five_am() {
        let slots = time_slots();
        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().map(String::as_str), Some("10:00"));
        assert_eq!(slots[14], "00:00");
        assert_eq!(slots.last().map(String::as_str), Some("05:00"));
        assert!(approx(timeline_height(&config()), 2400.0));
    }
}
