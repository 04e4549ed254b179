//! Trailing averages and favorable/unfavorable comparisons.

use serde::{Deserialize, Serialize};

use moneta_domain::{GoalDirection, Period, PeriodRange};

/// Number of preceding periods averaged by default.
pub const DEFAULT_TRAILING_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Current-period total measured against its trailing average.
pub struct TrendComparison {
    pub current: f64,
    pub average: f64,
    /// `current - average`.
    pub delta: f64,
    /// Whether the delta sign is good news for the tracked direction:
    /// spending less than usual is favorable, earning less is not.
    pub favorable: bool,
}

/// Rolling comparisons across the period catalog.
pub struct TrendService;

impl TrendService {
    /// Arithmetic mean of `range_total` over up to `window` periods
    /// immediately preceding `index`.
    ///
    /// Fewer periods are used near the start of the catalog; an empty window
    /// averages to 0.
    pub fn trailing_average<F>(
        periods: &[Period],
        index: usize,
        mut range_total: F,
        window: usize,
    ) -> f64
    where
        F: FnMut(PeriodRange) -> f64,
    {
        let index = index.min(periods.len());
        let preceding = &periods[index.saturating_sub(window)..index];
        if preceding.is_empty() {
            return 0.0;
        }
        let sum: f64 = preceding
            .iter()
            .map(|period| range_total(period.range()))
            .sum();
        sum / preceding.len() as f64
    }

    /// Compares a current total against its trailing average.
    pub fn compare(current: f64, average: f64, direction: GoalDirection) -> TrendComparison {
        let delta = current - average;
        TrendComparison {
            current,
            average,
            delta,
            favorable: direction.is_favorable(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    use crate::period_service::PeriodCatalog;
    use moneta_domain::ReportUnit;

    fn catalog() -> Vec<Period> {
        PeriodCatalog::build(
            6,
            ReportUnit::Monthly,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    fn totals_by_start(values: &[f64], periods: &[Period]) -> HashMap<NaiveDate, f64> {
        periods
            .iter()
            .zip(values)
            .map(|(period, value)| (period.start, *value))
            .collect()
    }

    #[test]
    fn averages_the_window_before_the_current_period() {
        let periods = catalog();
        let totals = totals_by_start(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0], &periods);
        let average = TrendService::trailing_average(
            &periods,
            5,
            |range| totals[&range.start],
            3,
        );
        assert_eq!(average, 40.0);
    }

    #[test]
    fn window_shrinks_near_the_start() {
        let periods = catalog();
        let totals = totals_by_start(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0], &periods);
        let average = TrendService::trailing_average(
            &periods,
            1,
            |range| totals[&range.start],
            3,
        );
        assert_eq!(average, 10.0);
    }

    #[test]
    fn empty_window_averages_to_zero() {
        let periods = catalog();
        let average =
            TrendService::trailing_average(&periods, 0, |_| panic!("no window to total"), 3);
        assert_eq!(average, 0.0);
    }

    #[test]
    fn empty_preceding_periods_keep_delta_equal_to_current() {
        let periods = catalog();
        let average = TrendService::trailing_average(&periods, 3, |_| 0.0, 3);
        assert_eq!(average, 0.0);
        let comparison = TrendService::compare(125.0, average, GoalDirection::Limit);
        assert_eq!(comparison.delta, 125.0);
        assert!(!comparison.favorable);
    }

    #[test]
    fn favorability_flips_between_limit_and_save() {
        let under = TrendService::compare(80.0, 100.0, GoalDirection::Limit);
        assert!(under.favorable);
        let over = TrendService::compare(120.0, 100.0, GoalDirection::Limit);
        assert!(!over.favorable);
        let earning_more = TrendService::compare(120.0, 100.0, GoalDirection::Save);
        assert!(earning_more.favorable);
        let earning_less = TrendService::compare(80.0, 100.0, GoalDirection::Save);
        assert!(!earning_less.favorable);
    }
}
