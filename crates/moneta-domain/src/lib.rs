//! moneta-domain
//!
//! Pure domain models (Transaction, Account, BudgetGoal, Period, Snapshot).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod common;
pub mod error;
pub mod goal;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use account::*;
pub use common::*;
pub use error::*;
pub use goal::*;
pub use period::*;
pub use snapshot::*;
pub use transaction::*;
