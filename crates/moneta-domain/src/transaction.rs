//! Domain models for logged transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};
use crate::error::{DomainError, DomainResult};

/// Synthesized category label for transfer activity.
pub const TRANSFER_LABEL: &str = "Transfer";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    /// Positive, currency-agnostic magnitude; the sign comes from `kind`.
    pub amount: f64,
    pub category: Option<String>,
    pub date: NaiveDate,
    /// Source account; the only leg for income and expense entries.
    pub account_id: Uuid,
    /// Destination leg, present only for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    /// Omits the transaction from every aggregation while keeping it in raw
    /// listings.
    #[serde(default)]
    pub exclude_from_reports: bool,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: f64, account_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category: None,
            date,
            account_id,
            to_account_id: None,
            participants: Vec::new(),
            location: None,
            photos: Vec::new(),
            exclude_from_reports: false,
        }
    }

    /// Builds a transfer moving `amount` from `account_id` to `to_account_id`.
    pub fn transfer(amount: f64, account_id: Uuid, to_account_id: Uuid, date: NaiveDate) -> Self {
        let mut txn = Self::new(TransactionKind::Transfer, amount, account_id, date);
        txn.to_account_id = Some(to_account_id);
        txn
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn excluded_from_reports(mut self) -> Self {
        self.exclude_from_reports = true;
        self
    }

    /// Returns `true` when the transaction participates in aggregations.
    pub fn is_reportable(&self) -> bool {
        !self.exclude_from_reports
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self.kind, TransactionKind::Transfer)
    }

    /// Returns `true` when the transaction touches `account_id`.
    ///
    /// Transfers match on either leg; income and expense entries match on the
    /// source account only.
    pub fn involves(&self, account_id: Uuid) -> bool {
        if self.account_id == account_id {
            return true;
        }
        self.is_transfer() && self.to_account_id == Some(account_id)
    }

    /// Resolves the canonical grouping label for reports.
    ///
    /// Every grouping operation must use this resolver so fallback labels stay
    /// identical across reports: transfers group under [`TRANSFER_LABEL`], and
    /// a blank category falls back to "Uncategorized Income" or
    /// "Uncategorized Expense".
    pub fn category_label(&self) -> String {
        if self.is_transfer() {
            return TRANSFER_LABEL.to_string();
        }
        let trimmed = self.category.as_deref().map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            format!("Uncategorized {}", self.kind)
        } else {
            trimmed.to_string()
        }
    }

    /// Checks write-path invariants before the transaction enters a store.
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.amount > 0.0 && self.amount.is_finite()) {
            return Err(DomainError::InvalidTransaction(
                "amount must be a positive number".into(),
            ));
        }
        match self.kind {
            TransactionKind::Transfer => match self.to_account_id {
                None => Err(DomainError::InvalidTransaction(
                    "transfer requires a destination account".into(),
                )),
                Some(to) if to == self.account_id => Err(DomainError::InvalidTransaction(
                    "transfer source and destination must differ".into(),
                )),
                Some(_) => Ok(()),
            },
            _ => {
                if self.to_account_id.is_some() {
                    return Err(DomainError::InvalidTransaction(format!(
                        "{} entries cannot carry a destination account",
                        self.kind
                    )));
                }
                if self.category.as_deref().map(str::trim).unwrap_or("").is_empty() {
                    return Err(DomainError::InvalidTransaction(format!(
                        "{} entries require a category",
                        self.kind
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} on {}", self.kind, self.amount, self.date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the supported transaction kinds.
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Transfer => "Transfer",
        };
        f.write_str(label)
    }
}
