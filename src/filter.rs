use crate::models::{Performance, Stage, StageFilter};

/// Everything the visitor can narrow the timetable by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceFilter {
    pub day: u8,
    pub stage: StageFilter,
    pub search: String,
}

impl PerformanceFilter {
    #[must_use]
    pub fn for_day(day: u8) -> Self {
        Self {
            day,
            stage: StageFilter::All,
            search: String::new(),
        }
    }

    #[must_use]
    pub fn apply<'a>(&self, all: &'a [Performance]) -> Vec<&'a Performance> {
        filter_performances(all, self.day, &self.stage, &self.search)
    }
}

/// Narrow performances by day, then stage, then artist substring.
///
/// Dataset order is preserved; an empty result is a normal outcome.
#[must_use]
pub fn filter_performances<'a>(
    all: &'a [Performance],
    day: u8,
    stage_filter: &StageFilter,
    search_text: &str,
) -> Vec<&'a Performance> {
    let needle = search_text.to_lowercase();
    all.iter()
        .filter(|p| p.day == day)
        .filter(|p| stage_filter.matches(&p.stage))
        .filter(|p| p.matches_artist(&needle))
        .collect()
}

/// Stage columns to show for the current stage filter
#[must_use]
pub fn stages_for_filter<'a>(stages: &'a [Stage], stage_filter: &StageFilter) -> Vec<&'a Stage> {
    stages.iter().filter(|s| stage_filter.matches(&s.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::sample;
    use crate::models::test_support::perf;

    fn ids(list: &[&Performance]) -> Vec<String> {
        list.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_no_filters_returns_whole_day_in_order() {
        let data = sample();
        for day in crate::constants::FESTIVAL_DAYS {
            let result = filter_performances(&data.performances, day, &StageFilter::All, "");
            let expected: Vec<String> = data.performances_for_day(day).map(|p| p.id.clone()).collect();
            assert_eq!(ids(&result), expected);
        }
    }

    #[test]
    fn test_stage_filter_is_exact() {
        let all = vec![
            perf("g", "GREEN STAGE", 1, "12:00", "13:00"),
            perf("r", "RED MARQUEE", 1, "12:00", "13:00"),
        ];
        let result = filter_performances(&all, 1, &StageFilter::from_selector("RED MARQUEE"), "");
        assert_eq!(ids(&result), vec!["r"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut a = perf("a", "GREEN STAGE", 1, "12:00", "13:00");
        a.artist = "Fred again..".to_string();
        let mut b = perf("b", "WHITE STAGE", 1, "14:00", "15:00");
        b.artist = "Vulfpeck".to_string();
        let all = vec![a, b];
        let result = filter_performances(&all, 1, &StageFilter::All, "AGAIN");
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_nothing_matches_is_empty_not_error() {
        let data = sample();
        let result = filter_performances(&data.performances, 1, &StageFilter::All, "zzz-no-such-artist");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_struct_matches_free_function() {
        let data = sample();
        let filter = PerformanceFilter {
            day: 2,
            stage: StageFilter::from_selector("WHITE STAGE"),
            search: String::new(),
        };
        let expected = filter_performances(&data.performances, 2, &filter.stage, "");
        assert_eq!(filter.apply(&data.performances), expected);
    }

    #[test]
    fn test_stages_for_filter() {
        let data = sample();
        assert_eq!(stages_for_filter(&data.stages, &StageFilter::All).len(), data.stages.len());
        let only_red = stages_for_filter(&data.stages, &StageFilter::from_selector("RED MARQUEE"));
        assert_eq!(only_red.len(), 1);
        assert!(stages_for_filter(&data.stages, &StageFilter::from_selector("NOWHERE")).is_empty());
    }
}
