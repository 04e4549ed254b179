//! Signed balance effect of a single transaction.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moneta_domain::{Transaction, TransactionKind};

/// Computes the signed effect of transactions on a viewed balance.
///
/// This is the single source of truth for "does this transaction increase or
/// decrease the balance being viewed". Balances, net income, and goal
/// progress all go through [`DeltaCalculator::delta`].
pub struct DeltaCalculator;

impl DeltaCalculator {
    /// Returns the signed amount of `txn` relative to `perspective`.
    ///
    /// Income is positive and expense negative regardless of perspective.
    /// A transfer is negative from its source account, positive from its
    /// destination, and zero otherwise; with no perspective, transfers net
    /// to zero.
    pub fn delta(txn: &Transaction, perspective: Option<Uuid>) -> f64 {
        match txn.kind {
            TransactionKind::Income => txn.amount,
            TransactionKind::Expense => -txn.amount,
            TransactionKind::Transfer => match perspective {
                Some(account_id) if txn.account_id == account_id => -txn.amount,
                Some(account_id) if txn.to_account_id == Some(account_id) => txn.amount,
                _ => 0.0,
            },
        }
    }

    /// Derives the presentation state for an amount from its delta sign.
    pub fn visual_state(txn: &Transaction, perspective: Option<Uuid>) -> AmountDisplay {
        let delta = Self::delta(txn, perspective);
        if delta > 0.0 {
            AmountDisplay {
                prefix: AmountPrefix::Plus,
                variant: AmountVariant::Income,
            }
        } else if delta < 0.0 {
            AmountDisplay {
                prefix: AmountPrefix::Minus,
                variant: AmountVariant::Expense,
            }
        } else {
            AmountDisplay {
                prefix: AmountPrefix::None,
                variant: AmountVariant::Neutral,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Presentation hints for rendering a transaction amount.
pub struct AmountDisplay {
    pub prefix: AmountPrefix,
    pub variant: AmountVariant,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountPrefix {
    Plus,
    Minus,
    None,
}

impl fmt::Display for AmountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            AmountPrefix::Plus => "+",
            AmountPrefix::Minus => "-",
            AmountPrefix::None => "",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountVariant {
    Income,
    Expense,
    Neutral,
}
