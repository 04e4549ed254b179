use thiserror::Error;

/// Errors raised while constructing or validating domain values.
///
/// The reporting engine itself never raises; these surface on the write path
/// that owns entity creation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
