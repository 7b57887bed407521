// Handler for the state-changing wallet operation

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use http::header;

use crate::error::WalletResult;
use crate::handlers::AppState;
use crate::models::TransactRequest;
use crate::services::canonical::NormalizedTransact;
use crate::services::transaction_engine;

/// Handler for POST /transact - applies a top-up, bonus or spend exactly once
/// per Idempotency-Key
pub async fn transact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<TransactRequest>,
) -> WalletResult<Response> {
    let idempotency_key = headers
        .get("Idempotency-Key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let request = NormalizedTransact::from_request(body, idempotency_key)?;
    let payload = transaction_engine::execute(&state, request).await?;

    // The engine hands back the stored response body; emit it verbatim so
    // retried requests observe byte-identical responses.
    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}
