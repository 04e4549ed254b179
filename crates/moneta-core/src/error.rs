use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),
    #[error("Period index {index} out of range: catalog holds {len} periods")]
    PeriodOutOfRange { index: usize, len: usize },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
