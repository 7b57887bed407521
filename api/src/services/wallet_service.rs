// Read views over wallet state: balance lookup and per-asset history

use crate::entity::{asset_types, wallets};
use crate::error::{WalletError, WalletResult};
use crate::handlers::AppState;
use crate::models::{BalanceResponse, HistoryEntry, HistoryResponse};
use crate::services::canonical;

/// Resolves the asset and wallet a read refers to
async fn resolve_wallet(
    state: &AppState,
    user_id: &str,
    asset_code: Option<&str>,
) -> WalletResult<(wallets::Model, asset_types::Model)> {
    let code = canonical::normalize_asset_code(asset_code.unwrap_or_default())?;

    let asset = state
        .repositories
        .asset
        .find_by_code(&code)
        .await?
        .ok_or_else(|| WalletError::NotFound("Asset type not found".to_string()))?;

    let wallet = state
        .repositories
        .wallet
        .find_by_user_and_asset(user_id, asset.id)
        .await?
        .ok_or_else(|| WalletError::NotFound("Wallet not found for user/asset".to_string()))?;

    Ok((wallet, asset))
}

/// Current balance for a user/asset pair
pub async fn get_balance(
    state: &AppState,
    user_id: &str,
    asset_code: Option<&str>,
) -> WalletResult<BalanceResponse> {
    let (wallet, asset) = resolve_wallet(state, user_id, asset_code).await?;

    Ok(BalanceResponse {
        user_id: user_id.to_owned(),
        balance: wallet.balance,
        asset_type_id: wallet.asset_type_id,
        asset_code: asset.code,
    })
}

/// Full transaction history for a user/asset pair, newest first, with the
/// current balance for context.
///
/// Known limitation: the response is unbounded; it grows with every
/// transaction on the wallet and no pagination is applied.
pub async fn get_transactions(
    state: &AppState,
    user_id: &str,
    asset_code: Option<&str>,
) -> WalletResult<HistoryResponse> {
    let (wallet, asset) = resolve_wallet(state, user_id, asset_code).await?;

    let entries = state.repositories.ledger.find_by_wallet(wallet.id).await?;
    let transactions = entries
        .into_iter()
        .map(|entry| HistoryEntry {
            transaction_id: entry.transaction_id,
            amount: entry.amount,
            entry_type: entry.reason,
            created_at: entry.created_at,
        })
        .collect();

    Ok(HistoryResponse {
        user_id: user_id.to_owned(),
        asset_code: asset.code,
        asset_type_id: asset.id,
        current_balance: wallet.balance,
        transactions,
    })
}
