//! Period aggregation over scoped transaction views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moneta_domain::{Period, PeriodRange, Transaction, TransactionKind};

use crate::delta_service::DeltaCalculator;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
/// Aggregated totals for one reporting range.
///
/// `income` and `expense` are non-negative amount sums; `net` and the
/// balances carry sign.
pub struct PeriodSummary {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
    pub opening_balance: f64,
    pub closing_balance: f64,
}

/// Aggregates transactions over date ranges.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes reportable activity relevant to `perspective` over `range`.
    ///
    /// Transactions strictly before `range.start` contribute only to the
    /// opening balance through their cumulative delta; transactions on the
    /// boundaries belong to the period. The closing balance is always
    /// `opening_balance + net`.
    pub fn summarize<'a, I>(
        transactions: I,
        range: PeriodRange,
        perspective: Option<Uuid>,
    ) -> PeriodSummary
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = PeriodSummary::default();
        for txn in transactions {
            if !txn.is_reportable() {
                continue;
            }
            if let Some(account_id) = perspective {
                if !txn.involves(account_id) {
                    continue;
                }
            }
            if txn.date < range.start {
                summary.opening_balance += DeltaCalculator::delta(txn, perspective);
            } else if range.contains(txn.date) {
                match txn.kind {
                    TransactionKind::Income => summary.income += txn.amount,
                    TransactionKind::Expense => summary.expense += txn.amount,
                    TransactionKind::Transfer => {}
                }
                summary.net += DeltaCalculator::delta(txn, perspective);
            }
        }
        summary.closing_balance = summary.opening_balance + summary.net;
        summary
    }

    /// Maps the aggregator across a period catalog, oldest first.
    pub fn summarize_catalog(
        transactions: &[Transaction],
        periods: &[Period],
        perspective: Option<Uuid>,
    ) -> Vec<PeriodSummary> {
        periods
            .iter()
            .map(|period| Self::summarize(transactions, period.range(), perspective))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::period_service::PeriodCatalog;
    use moneta_domain::ReportUnit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> PeriodRange {
        PeriodRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap()
    }

    #[test]
    fn income_and_expense_split_into_totals() {
        let account = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 1000.0, account, date(2024, 3, 1))
                .with_category("Salary"),
            Transaction::new(TransactionKind::Expense, 200.0, account, date(2024, 3, 5))
                .with_category("Food"),
        ];
        let summary = SummaryService::summarize(&transactions, march(), None);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.expense, 200.0);
        assert_eq!(summary.net, 800.0);
        assert_eq!(summary.opening_balance, 0.0);
        assert_eq!(summary.closing_balance, 800.0);
    }

    #[test]
    fn earlier_activity_feeds_opening_balance_only() {
        let account = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 300.0, account, date(2024, 2, 10))
                .with_category("Salary"),
            Transaction::new(TransactionKind::Expense, 50.0, account, date(2024, 2, 20))
                .with_category("Food"),
            Transaction::new(TransactionKind::Expense, 100.0, account, date(2024, 3, 2))
                .with_category("Food"),
        ];
        let summary = SummaryService::summarize(&transactions, march(), None);
        assert_eq!(summary.opening_balance, 250.0);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.expense, 100.0);
        assert_eq!(summary.net, -100.0);
        assert_eq!(summary.closing_balance, 150.0);
    }

    #[test]
    fn boundary_dates_belong_to_the_period() {
        let account = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 10.0, account, date(2024, 3, 1))
                .with_category("Salary"),
            Transaction::new(TransactionKind::Income, 20.0, account, date(2024, 3, 31))
                .with_category("Salary"),
        ];
        let summary = SummaryService::summarize(&transactions, march(), None);
        assert_eq!(summary.income, 30.0);
        assert_eq!(summary.opening_balance, 0.0);
    }

    #[test]
    fn transfers_shift_balances_per_account_but_not_totals() {
        let checking = Uuid::new_v4();
        let savings = Uuid::new_v4();
        let transactions = vec![Transaction::transfer(
            500.0,
            checking,
            savings,
            date(2024, 3, 10),
        )];
        let from_checking = SummaryService::summarize(&transactions, march(), Some(checking));
        assert_eq!(from_checking.income, 0.0);
        assert_eq!(from_checking.expense, 0.0);
        assert_eq!(from_checking.net, -500.0);
        let from_savings = SummaryService::summarize(&transactions, march(), Some(savings));
        assert_eq!(from_savings.net, 500.0);
        let account_agnostic = SummaryService::summarize(&transactions, march(), None);
        assert_eq!(account_agnostic.net, 0.0);
    }

    #[test]
    fn excluded_and_unrelated_transactions_contribute_nothing() {
        let account = Uuid::new_v4();
        let other = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Expense, 75.0, account, date(2024, 3, 5))
                .with_category("Food")
                .excluded_from_reports(),
            Transaction::new(TransactionKind::Expense, 33.0, other, date(2024, 3, 6))
                .with_category("Food"),
        ];
        let summary = SummaryService::summarize(&transactions, march(), Some(account));
        assert_eq!(summary, PeriodSummary::default());
    }

    #[test]
    fn closing_balance_always_equals_opening_plus_net() {
        let account = Uuid::new_v4();
        let other = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 120.0, account, date(2024, 2, 3))
                .with_category("Salary"),
            Transaction::new(TransactionKind::Expense, 45.5, account, date(2024, 3, 9))
                .with_category("Food"),
            Transaction::transfer(80.0, account, other, date(2024, 3, 12)),
        ];
        for perspective in [None, Some(account), Some(other)] {
            let summary = SummaryService::summarize(&transactions, march(), perspective);
            assert_eq!(
                summary.closing_balance,
                summary.opening_balance + summary.net
            );
        }
    }

    #[test]
    fn catalog_summaries_line_up_with_periods() {
        let account = Uuid::new_v4();
        let transactions = vec![
            Transaction::new(TransactionKind::Expense, 10.0, account, date(2024, 1, 15))
                .with_category("Food"),
            Transaction::new(TransactionKind::Expense, 20.0, account, date(2024, 2, 15))
                .with_category("Food"),
        ];
        let periods = PeriodCatalog::build(3, ReportUnit::Monthly, date(2024, 2, 20));
        let summaries = SummaryService::summarize_catalog(&transactions, &periods, None);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].expense, 0.0);
        assert_eq!(summaries[1].expense, 10.0);
        assert_eq!(summaries[2].expense, 20.0);
        // later summaries carry the earlier months in their opening balance
        assert_eq!(summaries[2].opening_balance, -10.0);
    }
}
