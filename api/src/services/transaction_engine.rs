// Transaction engine: the single state-changing operation of the service.
// Owns the outermost database transaction for a mutation; repositories
// operate within it but never open or commit their own.

use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::db::repositories::{
    AssetRepository, IdempotencyRepository, LedgerRepository, WalletRepository,
};
use crate::db::DbError;
use crate::error::{WalletError, WalletResult};
use crate::handlers::AppState;
use crate::models::{TransactResponse, TREASURY_USER_ID};
use crate::services::canonical::NormalizedTransact;

/// Executes one mutation atomically and returns the serialized success body.
///
/// The returned string is exactly what gets stored as the idempotency
/// record's response payload, so a replay under the same key is
/// byte-identical to the first response. Any early error return drops the
/// transaction, which rolls back every tentative write.
pub async fn execute(state: &AppState, request: NormalizedTransact) -> WalletResult<String> {
    let txn = state.db.begin().await?;

    let asset = AssetRepository::find_by_code_on(&txn, &request.asset_code)
        .await?
        .ok_or_else(|| WalletError::NotFound("Asset type not found".to_string()))?;

    let user_wallet =
        WalletRepository::find_by_user_and_asset_on(&txn, &request.user_id, asset.id)
            .await?
            .ok_or_else(|| WalletError::NotFound("Wallet not found for user/asset".to_string()))?;
    let treasury_wallet =
        WalletRepository::find_by_user_and_asset_on(&txn, TREASURY_USER_ID, asset.id)
            .await?
            .ok_or_else(|| {
                WalletError::NotFound("Treasury wallet not found for asset".to_string())
            })?;

    // A prior commit under this key short-circuits the mutation entirely;
    // nothing was written yet, so releasing the transaction is a no-op.
    if let Some(existing) =
        IdempotencyRepository::lookup_on(&txn, &request.idempotency_key, &request.user_id).await?
    {
        txn.rollback().await?;
        if existing.request_hash != request.request_hash {
            return Err(WalletError::IdempotencyConflict);
        }
        tracing::debug!(
            user_id = %request.user_id,
            "Replaying stored response for idempotency key"
        );
        return Ok(existing.response_payload);
    }

    let (locked_user, locked_treasury) =
        WalletRepository::lock_pair_on(&txn, user_wallet.id, treasury_wallet.id).await?;

    let (user_delta, treasury_delta) = request.transaction_type.signed_deltas(request.amount);

    let user_wallet_id = locked_user.id;
    let treasury_wallet_id = locked_treasury.id;
    let asset_type_id = locked_user.asset_type_id;
    let new_balance = match WalletRepository::apply_deltas_on(
        &txn,
        locked_user,
        locked_treasury,
        user_delta,
        treasury_delta,
    )
    .await
    {
        Ok(balance) => balance,
        // The mutator refused to drive the user balance negative
        Err(DbError::BalanceUnderflow(_)) => {
            txn.rollback().await?;
            return Err(WalletError::InsufficientFunds);
        }
        Err(err) => return Err(err.into()),
    };

    let tx_id = Uuid::new_v4().to_string();
    LedgerRepository::insert_pair_on(
        &txn,
        &tx_id,
        request.transaction_type.as_str(),
        user_wallet_id,
        user_delta,
        treasury_wallet_id,
        treasury_delta,
    )
    .await?;

    let response = TransactResponse {
        tx_id,
        user_id: request.user_id.clone(),
        transaction_type: request.transaction_type,
        amount: request.amount,
        new_balance,
        asset_type_id,
        asset_code: asset.code,
    };
    let payload = serde_json::to_string(&response)
        .map_err(|e| WalletError::Internal(format!("response encoding failed: {}", e)))?;

    match IdempotencyRepository::insert_on(
        &txn,
        &request.idempotency_key,
        &request.user_id,
        &request.request_hash,
        &payload,
    )
    .await
    {
        Ok(()) => {
            txn.commit().await?;
            Ok(payload)
        }
        Err(DbError::DuplicateKey(_)) => {
            // A concurrent request under the same key committed first. Drop
            // our writes and answer with the winner's stored response.
            txn.rollback().await?;
            replay_from_winner(state, &request).await
        }
        Err(err) => Err(err.into()),
    }
}

/// Post-race fallback: the winning record committed before our insert ran,
/// so a fresh read outside the rolled-back transaction must see it.
async fn replay_from_winner(
    state: &AppState,
    request: &NormalizedTransact,
) -> WalletResult<String> {
    let existing = state
        .repositories
        .idempotency
        .lookup(&request.idempotency_key, &request.user_id)
        .await?
        .ok_or_else(|| {
            WalletError::Internal(
                "idempotency insert lost a race but no winning record exists".to_string(),
            )
        })?;

    if existing.request_hash != request.request_hash {
        return Err(WalletError::IdempotencyConflict);
    }
    Ok(existing.response_payload)
}
