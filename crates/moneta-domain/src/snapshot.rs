//! Immutable snapshot of the collections owned by an external store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::goal::BudgetGoal;
use crate::transaction::Transaction;

/// A consistent read of the store, taken once per report.
///
/// The engine never mutates a snapshot; every aggregation is recomputed from
/// it on each call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<BudgetGoal>,
}

impl Snapshot {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        goals: Vec<BudgetGoal>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            goals,
        }
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Accounts offered in pickers: everything not archived.
    pub fn active_accounts(&self) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| !account.is_archived)
            .collect()
    }

    /// The allowed account set for an "all accounts" aggregate view:
    /// accounts in `currency` that are not excluded from totals.
    ///
    /// Archived accounts stay in the set; their history still counts.
    pub fn aggregate_account_ids(&self, currency: &str) -> HashSet<Uuid> {
        self.accounts
            .iter()
            .filter(|account| !account.exclude_from_total && account.currency == currency)
            .map(|account| account.id)
            .collect()
    }
}
