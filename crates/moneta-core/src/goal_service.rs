//! Progress evaluation for budget goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use moneta_domain::{BudgetGoal, GoalDirection, PeriodRange, Snapshot, Transaction, TransactionKind};

use crate::delta_service::DeltaCalculator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Progress of one goal over one period.
pub struct GoalProgress {
    pub label: String,
    /// Spend so far (limit goals) or net saved, clamped at zero (savings
    /// goals).
    pub value: f64,
    /// Completion ratio in `0.0..=1.0`.
    pub percentage: f64,
    pub direction: GoalDirection,
}

impl GoalProgress {
    /// Complete goals render as "100%", never higher.
    pub fn is_complete(&self) -> bool {
        self.percentage >= 1.0
    }
}

/// Evaluates goals against reportable activity.
pub struct GoalService;

impl GoalService {
    /// Measures `goal` against the reportable activity in `range`.
    ///
    /// A category filter selects limit mode: the value is the matching
    /// expense spend. Without a filter the goal tracks net savings, summing
    /// signed deltas and clamping negative periods to zero. Scoping follows
    /// [`crate::summary_service::SummaryService::summarize`]: with a
    /// perspective account, only transactions involving it count.
    pub fn evaluate<'a, I>(
        goal: &BudgetGoal,
        transactions: I,
        range: PeriodRange,
        perspective: Option<Uuid>,
    ) -> GoalProgress
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let in_scope = transactions.into_iter().filter(|txn| {
            txn.is_reportable()
                && range.contains(txn.date)
                && perspective.map(|id| txn.involves(id)).unwrap_or(true)
        });
        let value = match &goal.category {
            Some(category) => in_scope
                .filter(|txn| txn.kind == TransactionKind::Expense)
                .filter(|txn| txn.category_label() == *category)
                .map(|txn| txn.amount)
                .sum(),
            None => {
                let net: f64 = in_scope
                    .map(|txn| DeltaCalculator::delta(txn, perspective))
                    .sum();
                net.max(0.0)
            }
        };
        GoalProgress {
            label: goal.name.clone(),
            value,
            percentage: progress_ratio(goal, value),
            direction: goal.direction(),
        }
    }

    /// Evaluates every goal in the snapshot against its own current period.
    ///
    /// Each goal's range is the week or month containing `reference`.
    pub fn evaluate_all(
        snapshot: &Snapshot,
        reference: NaiveDate,
        perspective: Option<Uuid>,
    ) -> Vec<GoalProgress> {
        snapshot
            .goals
            .iter()
            .map(|goal| {
                let range = goal.period.range_containing(reference);
                Self::evaluate(goal, &snapshot.transactions, range, perspective)
            })
            .collect()
    }
}

fn progress_ratio(goal: &BudgetGoal, value: f64) -> f64 {
    if goal.target > 0.0 {
        (value / goal.target).min(1.0)
    } else {
        // creation validates target > 0; degrade instead of dividing
        warn!(goal = %goal.name, target = goal.target, "goal has a non-positive target");
        0.0
    }
}
