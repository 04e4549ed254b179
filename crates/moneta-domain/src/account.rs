//! Domain models for user accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable, NamedEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub currency: String,
    /// Balance before any logged transaction; running balances build on it.
    pub initial_balance: f64,
    /// Removes the account from "all accounts" aggregate views while keeping
    /// it individually selectable.
    #[serde(default)]
    pub exclude_from_total: bool,
    /// Hides the account from pickers; historical transactions remain valid.
    #[serde(default)]
    pub is_archived: bool,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            currency: currency.into(),
            initial_balance: 0.0,
            exclude_from_total: false,
            is_archived: false,
        }
    }

    pub fn with_initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = balance;
        self
    }

    pub fn excluded_from_total(mut self) -> Self {
        self.exclude_from_total = true;
        self
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Supported account types.
pub enum AccountKind {
    Cash,
    Bank,
    Card,
    Investment,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Cash => "Cash",
            AccountKind::Bank => "Bank",
            AccountKind::Card => "Card",
            AccountKind::Investment => "Investment",
        };
        f.write_str(label)
    }
}
