//! Reporting periods and their inclusive date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::ReportUnit;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Defines an inclusive calendar-day range for reporting.
pub struct PeriodRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns `true` when `date` falls within the range, boundaries included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A selectable reporting period: a stable key, a human label, and bounds.
pub struct Period {
    /// Stable sort/lookup key, e.g. `2024-03` or `2024-W11`.
    pub key: String,
    /// Human-readable label, e.g. `March 2024`.
    pub label: String,
    pub unit: ReportUnit,
    /// Canonical start of the unit (Monday or first of month).
    pub start: NaiveDate,
}

impl Period {
    /// Returns the canonical inclusive bounds of this period.
    pub fn range(&self) -> PeriodRange {
        PeriodRange {
            start: self.start,
            end: self.unit.end_of(self.start),
        }
    }
}
