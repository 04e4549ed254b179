//! Domain models for budget goals.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable, NamedEntity, ReportUnit};
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetGoal {
    pub id: Uuid,
    pub name: String,
    /// Spending ceiling or savings target, depending on `category`.
    pub target: f64,
    pub period: ReportUnit,
    /// When set the goal caps spending in that category; when `None` it
    /// tracks aggregate net savings instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BudgetGoal {
    pub fn new(name: impl Into<String>, target: f64, period: ReportUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            period,
            category: None,
        }
    }

    pub fn for_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns how progress against the goal is judged.
    pub fn direction(&self) -> GoalDirection {
        if self.category.is_some() {
            GoalDirection::Limit
        } else {
            GoalDirection::Save
        }
    }

    /// Checks write-path invariants before the goal enters a store.
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.target > 0.0 && self.target.is_finite()) {
            return Err(DomainError::InvalidGoal(
                "target must be a positive number".into(),
            ));
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(DomainError::InvalidGoal(
                    "category filter cannot be blank".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Identifiable for BudgetGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BudgetGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BudgetGoal {
    fn display_label(&self) -> String {
        format!("{} ({} {})", self.name, self.period, self.direction())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes spending-ceiling goals from savings goals.
///
/// The tag also decides which comparison sign counts as favorable: staying
/// under matters for limits, staying over matters for savings.
pub enum GoalDirection {
    Limit,
    Save,
}

impl GoalDirection {
    /// Returns `true` when `delta` (actual minus reference) is favorable.
    pub fn is_favorable(self, delta: f64) -> bool {
        match self {
            GoalDirection::Limit => delta <= 0.0,
            GoalDirection::Save => delta >= 0.0,
        }
    }
}

impl fmt::Display for GoalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalDirection::Limit => "Limit",
            GoalDirection::Save => "Save",
        };
        f.write_str(label)
    }
}
