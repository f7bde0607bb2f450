use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

/// Snapshot content that breaks an input invariant. Reported for the first
/// offending record; values are never clamped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transaction {0} must have a positive amount")]
    NonPositiveTransactionAmount(Uuid),
    #[error("transaction {0} has an empty description")]
    EmptyTransactionDescription(Uuid),
    #[error("recurring expense {0} must have a positive amount")]
    NonPositiveRecurringAmount(Uuid),
    #[error("recurring expense {0} has an empty description")]
    EmptyRecurringDescription(Uuid),
    #[error("recurring expense {id} has due day {due_day}, expected 1-31")]
    DueDayOutOfRange { id: Uuid, due_day: u32 },
    #[error("recurring expense {0} ends before it starts")]
    EndBeforeStart(Uuid),
    #[error("budget monthly income cannot be negative")]
    NegativeMonthlyIncome,
    #[error("budget emergency reserve cannot be negative")]
    NegativeEmergencyReserve,
    #[error("leisure percent {0} is outside 0-100")]
    LeisurePercentOutOfRange(u8),
    #[error("category {0} has an empty name")]
    EmptyCategoryName(Uuid),
}

/// Unified error type for storage, configuration and validation failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid snapshot: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<ConfigError> for FinanceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FinanceError::Io(io),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                FinanceError::Config(message)
            }
        }
    }
}
