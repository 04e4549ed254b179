//! moneta-core
//!
//! Aggregation and reporting services for moneta. Every service is a pure
//! function over an immutable [`moneta_domain::Snapshot`] read. Depends on
//! moneta-domain. No CLI, no terminal I/O, no storage interactions.

pub mod balance_service;
pub mod breakdown_service;
pub mod delta_service;
pub mod error;
pub mod goal_service;
pub mod period_service;
pub mod report_service;
pub mod scope_service;
pub mod summary_service;
pub mod trend_service;

pub use balance_service::*;
pub use breakdown_service::*;
pub use delta_service::*;
pub use error::{CoreError, CoreResult};
pub use goal_service::*;
pub use period_service::*;
pub use report_service::*;
pub use scope_service::*;
pub use summary_service::*;
pub use trend_service::*;
