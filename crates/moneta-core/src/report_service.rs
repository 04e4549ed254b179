//! Assembles full period reports for presentation layers.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use moneta_domain::{GoalDirection, Period, Snapshot, Transaction, TransactionKind};

use crate::breakdown_service::{BreakdownService, CategoryBreakdown, DEFAULT_TOP_SLICES};
use crate::error::{CoreError, CoreResult};
use crate::goal_service::{GoalProgress, GoalService};
use crate::scope_service::ScopeFilter;
use crate::summary_service::{PeriodSummary, SummaryService};
use crate::trend_service::{TrendComparison, TrendService, DEFAULT_TRAILING_WINDOW};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Everything a report screen renders for one period.
pub struct PeriodReport {
    pub period: Period,
    pub summary: PeriodSummary,
    pub expense_breakdown: CategoryBreakdown,
    pub income_breakdown: CategoryBreakdown,
    pub expense_trend: TrendComparison,
    pub goals: Vec<GoalProgress>,
}

/// Composes the engine services into ready-to-render reports.
///
/// See also: the individual services for the underlying rules; this façade
/// only scopes once and fans the same view out to each of them.
pub struct ReportService;

impl ReportService {
    /// Builds the report for `periods[index]`.
    ///
    /// With a perspective account the view narrows to transactions touching
    /// it; otherwise it covers the "all accounts" aggregate for `currency`.
    /// Goals are evaluated against their own week or month containing the
    /// period's end date.
    pub fn period_report(
        snapshot: &Snapshot,
        periods: &[Period],
        index: usize,
        perspective: Option<Uuid>,
        currency: &str,
    ) -> CoreResult<PeriodReport> {
        let period = periods.get(index).ok_or(CoreError::PeriodOutOfRange {
            index,
            len: periods.len(),
        })?;
        if let Some(account_id) = perspective {
            if snapshot.account(account_id).is_none() {
                return Err(CoreError::AccountNotFound(account_id));
            }
        }

        let scoped: Vec<&Transaction> = match perspective {
            Some(account_id) => ScopeFilter::by_account(&snapshot.transactions, Some(account_id)),
            None => {
                let allowed = snapshot.aggregate_account_ids(currency);
                ScopeFilter::within_accounts(&snapshot.transactions, &allowed)
            }
        };
        let range = period.range();
        debug!(
            period = %period.key,
            scoped = scoped.len(),
            "assembling period report"
        );

        let summary = SummaryService::summarize(scoped.iter().copied(), range, perspective);

        let in_range: Vec<&Transaction> = scoped
            .iter()
            .copied()
            .filter(|txn| range.contains(txn.date))
            .collect();
        let expense_breakdown = BreakdownService::breakdown(
            in_range.iter().copied(),
            TransactionKind::Expense,
            DEFAULT_TOP_SLICES,
        );
        let income_breakdown = BreakdownService::breakdown(
            in_range.iter().copied(),
            TransactionKind::Income,
            DEFAULT_TOP_SLICES,
        );

        let average = TrendService::trailing_average(
            periods,
            index,
            |earlier| {
                SummaryService::summarize(scoped.iter().copied(), earlier, perspective).expense
            },
            DEFAULT_TRAILING_WINDOW,
        );
        let expense_trend = TrendService::compare(summary.expense, average, GoalDirection::Limit);

        let goals = snapshot
            .goals
            .iter()
            .map(|goal| {
                let goal_range = goal.period.range_containing(range.end);
                GoalService::evaluate(goal, scoped.iter().copied(), goal_range, perspective)
            })
            .collect();

        Ok(PeriodReport {
            period: period.clone(),
            summary,
            expense_breakdown,
            income_breakdown,
            expense_trend,
            goals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::period_service::PeriodCatalog;
    use moneta_domain::{Account, AccountKind, BudgetGoal, ReportUnit, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let checking = Account::new("Checking", AccountKind::Bank, "USD");
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 1500.0, checking.id, date(2024, 3, 1))
                .with_category("Salary"),
            Transaction::new(TransactionKind::Expense, 90.0, checking.id, date(2024, 3, 8))
                .with_category("Dining"),
        ];
        let goals = vec![
            BudgetGoal::new("Dining", 250.0, ReportUnit::Monthly).for_category("Dining"),
        ];
        Snapshot::new(vec![checking], transactions, goals)
    }

    #[test]
    fn unknown_perspective_account_is_rejected() {
        let snapshot = snapshot();
        let periods = PeriodCatalog::build(3, ReportUnit::Monthly, date(2024, 3, 20));
        let missing = Uuid::new_v4();
        let err = ReportService::period_report(&snapshot, &periods, 2, Some(missing), "USD")
            .expect_err("unknown account should fail");
        assert!(matches!(err, CoreError::AccountNotFound(id) if id == missing));
    }

    #[test]
    fn out_of_range_period_index_is_rejected() {
        let snapshot = snapshot();
        let periods = PeriodCatalog::build(3, ReportUnit::Monthly, date(2024, 3, 20));
        let err = ReportService::period_report(&snapshot, &periods, 7, None, "USD")
            .expect_err("index past the catalog should fail");
        assert!(matches!(
            err,
            CoreError::PeriodOutOfRange { index: 7, len: 3 }
        ));
    }

    #[test]
    fn report_combines_summary_breakdowns_and_goals() {
        let snapshot = snapshot();
        let periods = PeriodCatalog::build(3, ReportUnit::Monthly, date(2024, 3, 20));
        let report = ReportService::period_report(&snapshot, &periods, 2, None, "USD").unwrap();
        assert_eq!(report.period.key, "2024-03");
        assert_eq!(report.summary.income, 1500.0);
        assert_eq!(report.summary.expense, 90.0);
        assert_eq!(report.expense_breakdown.rows[0].label, "Dining");
        assert_eq!(report.income_breakdown.rows[0].label, "Salary");
        assert_eq!(report.goals.len(), 1);
        assert_eq!(report.goals[0].value, 90.0);
        // no earlier spending, so the whole current spend is over average
        assert_eq!(report.expense_trend.delta, 90.0);
        assert!(!report.expense_trend.favorable);
    }

    #[test]
    fn foreign_currency_scope_empties_the_aggregate_view() {
        let snapshot = snapshot();
        let periods = PeriodCatalog::build(3, ReportUnit::Monthly, date(2024, 3, 20));
        let report = ReportService::period_report(&snapshot, &periods, 2, None, "EUR").unwrap();
        assert_eq!(report.summary, PeriodSummary::default());
        assert!(report.expense_breakdown.rows.is_empty());
    }
}
