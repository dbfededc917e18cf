use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid query filter: {0} (expected all, allowed or blocked)")]
    InvalidQueryFilter(String),

    #[error("Invalid background pattern: {0}")]
    InvalidBackgroundPattern(String),

    #[error("Query log not found: {0}")]
    LogNotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
