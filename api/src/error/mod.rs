use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

/// Service-level error taxonomy. Every variant maps to one stable status
/// code; clients retry transient failures themselves, which the idempotency
/// contract makes safe.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Missing Idempotency-Key header")]
    MissingIdempotencyKey,
    #[error("SYSTEM_TREASURY is reserved")]
    ReservedUser,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("{0}")]
    NotFound(String),
    #[error("Idempotency-Key already used with different request")]
    IdempotencyConflict,
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type WalletResult<T> = Result<T, WalletError>;

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let status = match &self {
            WalletError::MissingIdempotencyKey
            | WalletError::ReservedUser
            | WalletError::InsufficientFunds => StatusCode::BAD_REQUEST,
            WalletError::NotFound(_) => StatusCode::NOT_FOUND,
            WalletError::IdempotencyConflict => StatusCode::CONFLICT,
            WalletError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WalletError::Database(_) | WalletError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// DbError to WalletError conversion implementation
impl From<DbError> for WalletError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::BalanceUnderflow(_) => WalletError::InsufficientFunds,
            DbError::ConnectionError(msg)
            | DbError::QueryError(msg)
            | DbError::DuplicateKey(msg) => WalletError::Database(msg),
        }
    }
}

impl From<sea_orm::DbErr> for WalletError {
    fn from(err: sea_orm::DbErr) -> Self {
        WalletError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: WalletError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(status_of(WalletError::MissingIdempotencyKey), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(WalletError::ReservedUser), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(WalletError::InsufficientFunds), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lookup_failures_map_to_404() {
        assert_eq!(
            status_of(WalletError::NotFound("Asset type not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn key_reuse_maps_to_409() {
        assert_eq!(status_of(WalletError::IdempotencyConflict), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_422() {
        assert_eq!(
            status_of(WalletError::Validation("amount must be a positive integer".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn balance_underflow_surfaces_as_insufficient_funds() {
        let err = WalletError::from(DbError::BalanceUnderflow("wallet 1".into()));
        assert!(matches!(err, WalletError::InsufficientFunds));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_faults_map_to_500() {
        assert_eq!(
            status_of(WalletError::Database("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(WalletError::Internal("broken invariant".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
