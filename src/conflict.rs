use crate::models::Performance;

/// Two performances on the same stage whose intervals intersect.
///
/// This is the predicate the timetable grid uses to split a stage column into lanes.
#[must_use]
pub fn same_stage_overlap(a: &Performance, b: &Performance) -> bool {
    a.stage == b.stage && a.time_range().overlaps(&b.time_range())
}

/// Two performances whose intervals intersect, regardless of stage.
///
/// Used to warn about clashes inside the personal selection.
#[must_use]
pub fn schedule_conflict(a: &Performance, b: &Performance) -> bool {
    a.time_range().overlaps(&b.time_range())
}

/// A clashing pair inside the personal selection, in chronological order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConflict {
    pub first_id: String,
    pub second_id: String,
}

/// Every other selected performance that clashes with `performance`
#[must_use]
pub fn conflicts_for<'a>(performance: &Performance, selected: &[&'a Performance]) -> Vec<&'a Performance> {
    selected
        .iter()
        .copied()
        .filter(|other| other.id != performance.id)
        .filter(|other| schedule_conflict(performance, other))
        .collect()
}

/// All clashing pairs in the selection
#[must_use]
pub fn find_schedule_conflicts(selected: &[&Performance]) -> Vec<ScheduleConflict> {
    let mut sorted = selected.to_vec();
    crate::models::sort_chronologically(&mut sorted);

    let mut conflicts = Vec::new();
    for (i, first) in sorted.iter().enumerate() {
        let first_range = first.time_range();
        for second in sorted.iter().skip(i + 1) {
            let second_range = second.time_range();
            // Sorted by start, nothing further along can overlap
            if second_range.start >= first_range.end {
                break;
            }
            if first.id != second.id && first_range.overlaps(&second_range) {
                conflicts.push(ScheduleConflict {
                    first_id: first.id.clone(),
                    second_id: second.id.clone(),
                });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::perf;

    #[test]
    fn test_boundary_touching_is_not_overlap() {
        let a = perf("a", "GREEN STAGE", 1, "17:00", "18:00");
        let b = perf("b", "GREEN STAGE", 1, "18:00", "19:00");
        assert!(!same_stage_overlap(&a, &b));
        assert!(!schedule_conflict(&a, &b));
    }

    #[test]
    fn test_same_stage_overlap_requires_same_stage() {
        let a = perf("a", "GREEN STAGE", 1, "17:00", "18:30");
        let b = perf("b", "RED MARQUEE", 1, "18:00", "19:00");
        assert!(!same_stage_overlap(&a, &b));
        assert!(schedule_conflict(&a, &b));
    }

    #[test]
    fn test_schedule_conflict_is_symmetric() {
        let list = [
            perf("a", "GREEN STAGE", 1, "17:00", "18:30"),
            perf("b", "RED MARQUEE", 1, "18:00", "19:00"),
            perf("c", "WHITE STAGE", 1, "23:30", "01:00"),
            perf("d", "FIELD OF HEAVEN", 1, "00:30", "02:00"),
            perf("e", "FIELD OF HEAVEN", 2, "00:30", "02:00"),
        ];
        for a in &list {
            for b in &list {
                assert_eq!(schedule_conflict(a, b), schedule_conflict(b, a), "{} vs {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_midnight_crossing_overlap() {
        let late = perf("c", "WHITE STAGE", 1, "23:30", "01:00");
        let after = perf("d", "FIELD OF HEAVEN", 1, "00:30", "02:00");
        assert!(schedule_conflict(&late, &after));
    }

    #[test]
    fn test_same_clock_time_on_different_days_does_not_conflict() {
        let day1 = perf("a", "GREEN STAGE", 1, "20:00", "21:00");
        let day2 = perf("b", "GREEN STAGE", 2, "20:00", "21:00");
        assert!(!schedule_conflict(&day1, &day2));
    }

    #[test]
    fn test_conflicts_for_skips_itself() {
        let a = perf("a", "GREEN STAGE", 1, "17:00", "18:30");
        let b = perf("b", "RED MARQUEE", 1, "18:00", "19:00");
        let c = perf("c", "RED MARQUEE", 1, "20:00", "21:00");
        let selected = vec![&a, &b, &c];
        let clashing: Vec<_> = conflicts_for(&a, &selected).iter().map(|p| p.id.clone()).collect();
        assert_eq!(clashing, vec!["b"]);
        assert!(conflicts_for(&c, &selected).is_empty());
    }

    #[test]
    fn test_green_then_red_with_short_gap_has_no_conflict() {
        let green = perf("g", "GREEN STAGE", 1, "19:00", "20:00");
        let red = perf("r", "RED MARQUEE", 1, "20:04", "21:00");
        assert!(find_schedule_conflicts(&[&green, &red]).is_empty());
    }

    #[test]
    fn test_find_schedule_conflicts_pairs_in_order() {
        let a = perf("a", "GREEN STAGE", 1, "17:00", "19:00");
        let b = perf("b", "RED MARQUEE", 1, "18:00", "19:30");
        let c = perf("c", "WHITE STAGE", 1, "18:30", "20:00");
        let conflicts = find_schedule_conflicts(&[&c, &a, &b]);
        let pairs: Vec<_> = conflicts.iter().map(|c| (c.first_id.as_str(), c.second_id.as_str())).collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }
}
