//! Running balances derived from transaction history.

use moneta_domain::{Account, Snapshot, Transaction};

use crate::delta_service::DeltaCalculator;

/// Derives account balances; nothing is cached, balances are recomputed from
/// the full history on each call.
pub struct BalanceService;

impl BalanceService {
    /// Initial balance plus the cumulative delta of every reportable
    /// transaction touching the account.
    pub fn account_balance(account: &Account, transactions: &[Transaction]) -> f64 {
        let deltas: f64 = transactions
            .iter()
            .filter(|txn| txn.is_reportable() && txn.involves(account.id))
            .map(|txn| DeltaCalculator::delta(txn, Some(account.id)))
            .sum();
        account.initial_balance + deltas
    }

    /// Combined balance of the "all accounts" aggregate view for `currency`:
    /// accounts excluded from totals stay out, archived accounts stay in.
    pub fn total_balance(snapshot: &Snapshot, currency: &str) -> f64 {
        let allowed = snapshot.aggregate_account_ids(currency);
        snapshot
            .accounts
            .iter()
            .filter(|account| allowed.contains(&account.id))
            .map(|account| Self::account_balance(account, &snapshot.transactions))
            .sum()
    }
}
