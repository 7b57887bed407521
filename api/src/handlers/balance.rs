// Handler for the balance read endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::WalletResult;
use crate::handlers::AppState;
use crate::models::{AssetCodeQuery, BalanceResponse};
use crate::services::wallet_service;

/// Handler for GET /balance/{user_id} - current balance for one user/asset
pub async fn get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<AssetCodeQuery>,
) -> WalletResult<Json<BalanceResponse>> {
    let response =
        wallet_service::get_balance(&state, &user_id, params.asset_code.as_deref()).await?;
    Ok(Json(response))
}
