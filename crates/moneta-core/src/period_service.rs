//! Builds the catalog of selectable reporting periods.

use chrono::{Datelike, NaiveDate, Utc};

use moneta_domain::{Period, ReportUnit};

/// Generates ordered, contiguous reporting periods.
pub struct PeriodCatalog;

impl PeriodCatalog {
    /// Returns `count` consecutive periods of `unit` ending at the one that
    /// contains `today`, oldest first.
    ///
    /// Ranges are contiguous and non-overlapping; the last period always
    /// contains `today`. Total over any positive `count`.
    pub fn build(count: usize, unit: ReportUnit, today: NaiveDate) -> Vec<Period> {
        let anchor = unit.start_of(today);
        (0..count)
            .rev()
            .map(|back| {
                let start = unit.shift_back(anchor, back as u32);
                Period {
                    key: Self::key_for(unit, start),
                    label: Self::label_for(unit, start),
                    unit,
                    start,
                }
            })
            .collect()
    }

    /// Convenience form anchored on the current local day.
    pub fn build_current(count: usize, unit: ReportUnit) -> Vec<Period> {
        Self::build(count, unit, Utc::now().date_naive())
    }

    fn key_for(unit: ReportUnit, start: NaiveDate) -> String {
        match unit {
            ReportUnit::Monthly => start.format("%Y-%m").to_string(),
            ReportUnit::Weekly => {
                let week = start.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
        }
    }

    fn label_for(unit: ReportUnit, start: NaiveDate) -> String {
        match unit {
            ReportUnit::Monthly => start.format("%B %Y").to_string(),
            ReportUnit::Weekly => {
                let end = unit.end_of(start);
                format!(
                    "{} - {}",
                    start.format("%b %-d"),
                    end.format("%b %-d, %Y")
                )
            }
        }
    }
}
