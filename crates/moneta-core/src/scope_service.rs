//! Narrows transaction collections to an account and reporting scope.

use std::collections::HashSet;

use uuid::Uuid;

use moneta_domain::Transaction;

/// Stateless filters applied before aggregation.
pub struct ScopeFilter;

impl ScopeFilter {
    /// Keeps transactions relevant to `account_id`.
    ///
    /// `None` returns the collection unchanged; callers computing an
    /// "all accounts" aggregate restrict further via [`Self::within_accounts`].
    /// Transfers match on either leg, other kinds on the source account.
    pub fn by_account(
        transactions: &[Transaction],
        account_id: Option<Uuid>,
    ) -> Vec<&Transaction> {
        match account_id {
            None => transactions.iter().collect(),
            Some(id) => transactions.iter().filter(|txn| txn.involves(id)).collect(),
        }
    }

    /// Drops transactions flagged as excluded from reports.
    ///
    /// Applied before every aggregation, never before raw listing views.
    pub fn reportable(transactions: &[Transaction]) -> Vec<&Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.is_reportable())
            .collect()
    }

    /// Keeps transactions whose accounts belong to the allowed set.
    ///
    /// The set typically comes from
    /// [`moneta_domain::Snapshot::aggregate_account_ids`]. A transfer stays
    /// when either leg is allowed.
    pub fn within_accounts<'a>(
        transactions: &'a [Transaction],
        allowed: &HashSet<Uuid>,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| {
                allowed.contains(&txn.account_id)
                    || txn
                        .to_account_id
                        .map(|to| allowed.contains(&to))
                        .unwrap_or(false)
            })
            .collect()
    }
}
