// Handler for the transaction history endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::WalletResult;
use crate::handlers::AppState;
use crate::models::{AssetCodeQuery, HistoryResponse};
use crate::services::wallet_service;

/// Handler for GET /transactions/{user_id} - per-asset ledger history,
/// newest first
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<AssetCodeQuery>,
) -> WalletResult<Json<HistoryResponse>> {
    let response =
        wallet_service::get_transactions(&state, &user_id, params.asset_code.as_deref()).await?;
    Ok(Json(response))
}
