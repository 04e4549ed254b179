//! Shared traits and calendar arithmetic for reporting primitives.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::PeriodRange;

/// Exposes a stable identifier for entities held in a snapshot.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the reporting cadences offered by the period catalog.
#[derive(Default)]
pub enum ReportUnit {
    Weekly,
    #[default]
    Monthly,
}

impl ReportUnit {
    /// Returns the canonical start of the unit containing `date`.
    ///
    /// Weeks start on Monday; months on the first.
    pub fn start_of(self, date: NaiveDate) -> NaiveDate {
        match self {
            ReportUnit::Weekly => {
                let delta = date.weekday().num_days_from_monday() as i64;
                date - Duration::days(delta)
            }
            ReportUnit::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    /// Returns the inclusive end of the unit that starts at `start`.
    pub fn end_of(self, start: NaiveDate) -> NaiveDate {
        match self {
            ReportUnit::Weekly => start + Duration::days(6),
            ReportUnit::Monthly => {
                let last = days_in_month(start.year(), start.month());
                start.with_day(last).unwrap_or(start)
            }
        }
    }

    /// Shifts a unit start backwards by `steps` whole units.
    pub fn shift_back(self, start: NaiveDate, steps: u32) -> NaiveDate {
        match self {
            ReportUnit::Weekly => start - Duration::weeks(steps as i64),
            ReportUnit::Monthly => shift_month(start, -(steps as i32)),
        }
    }

    /// Returns the canonical inclusive range of the unit containing `date`.
    pub fn range_containing(self, date: NaiveDate) -> PeriodRange {
        let start = self.start_of(date);
        PeriodRange {
            start,
            end: self.end_of(start),
        }
    }
}

impl fmt::Display for ReportUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportUnit::Weekly => "Weekly",
            ReportUnit::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
