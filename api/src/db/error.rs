// Error types for database operations

use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred during database connection attempt
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A unique constraint rejected the write. The transaction engine relies
    /// on this to detect the idempotency-insert race.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A balance update would drive a user wallet below zero. Raised by the
    /// wallet mutator before anything is written.
    #[error("Balance underflow: {0}")]
    BalanceUnderflow(String),
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => DbError::DuplicateKey(msg),
            _ => DbError::QueryError(err.to_string()),
        }
    }
}
