use indexmap::IndexMap;

use crate::conflict::conflicts_for;
use crate::constants::FESTIVAL_DAYS;
use crate::models::{sort_chronologically, Performance, TimetableData};
use crate::walking::{route_legs, total_walking_minutes, RouteLeg, WalkingTable};

/// Look up selected ids in the dataset, silently skipping stale ones.
///
/// Selection order is kept.
#[must_use]
pub fn resolve_selection<'a, 'b>(
    data: &'a TimetableData,
    selected_ids: impl IntoIterator<Item = &'b str>,
) -> Vec<&'a Performance> {
    selected_ids
        .into_iter()
        .filter_map(|id| data.performance(id))
        .collect()
}

/// Selected performances of one day in festival order
#[must_use]
pub fn day_schedule<'a, 'b>(
    data: &'a TimetableData,
    selected_ids: impl IntoIterator<Item = &'b str>,
    day: u8,
) -> Vec<&'a Performance> {
    let mut schedule: Vec<_> = resolve_selection(data, selected_ids)
        .into_iter()
        .filter(|p| p.day == day)
        .collect();
    sort_chronologically(&mut schedule);
    schedule
}

/// Number of resolvable selections per festival day
#[must_use]
pub fn day_counts<'b>(data: &TimetableData, selected_ids: impl IntoIterator<Item = &'b str>) -> Vec<(u8, usize)> {
    let resolved = resolve_selection(data, selected_ids);
    FESTIVAL_DAYS
        .iter()
        .map(|&day| (day, resolved.iter().filter(|p| p.day == day).count()))
        .collect()
}

/// For each stage, the 1-based positions in `schedule` of performances played there
#[must_use]
pub fn stage_visits(schedule: &[&Performance]) -> IndexMap<String, Vec<usize>> {
    let mut visits: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (idx, p) in schedule.iter().enumerate() {
        visits.entry(p.stage.clone()).or_default().push(idx + 1);
    }
    visits
}

/// One row of the personal itinerary
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry<'a> {
    pub performance: &'a Performance,
    /// Other selected performances clashing with this one
    pub conflicting_ids: Vec<String>,
    /// The walk to the next entry, if any
    pub leg_to_next: Option<RouteLeg>,
}

impl PlanEntry<'_> {
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        !self.conflicting_ids.is_empty()
    }
}

/// Everything the My Timetable panel shows for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan<'a> {
    pub day: u8,
    pub entries: Vec<PlanEntry<'a>>,
    pub total_walking_minutes: u32,
}

impl DayPlan<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stage changes (legs) in the plan
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}

/// Build the itinerary for one day.
///
/// Conflicts are checked against every resolved selection, not only the
/// chosen day, so a late-night clash across the session boundary is still found.
#[must_use]
pub fn day_plan<'a, 'b>(
    data: &'a TimetableData,
    selected_ids: impl IntoIterator<Item = &'b str> + Clone,
    day: u8,
    table: &WalkingTable,
) -> DayPlan<'a> {
    let all_selected = resolve_selection(data, selected_ids.clone());
    let schedule = day_schedule(data, selected_ids, day);
    let legs = route_legs(&schedule, table);
    let total = total_walking_minutes(&legs);
    let mut legs = legs.into_iter();

    let entries = schedule
        .iter()
        .map(|&performance| PlanEntry {
            performance,
            conflicting_ids: conflicts_for(performance, &all_selected)
                .into_iter()
                .map(|p| p.id.clone())
                .collect(),
            leg_to_next: legs.next(),
        })
        .collect();

    DayPlan { day, entries, total_walking_minutes: total }
}
