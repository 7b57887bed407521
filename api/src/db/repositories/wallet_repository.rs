use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::db::error::DbError;
use crate::entity::wallets::{ActiveModel, Column, Entity as Wallet, Model};

/// Repository for wallet rows, including the lock-and-apply path used by the
/// transaction engine
#[derive(Clone)]
pub struct WalletRepository {
    db: Arc<DatabaseConnection>,
}

impl WalletRepository {
    /// Create a new wallet repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find the wallet for a user/asset pair, without locking
    pub async fn find_by_user_and_asset(
        &self,
        user_id: &str,
        asset_type_id: i32,
    ) -> Result<Option<Model>, DbError> {
        Self::find_by_user_and_asset_on(self.db.as_ref(), user_id, asset_type_id).await
    }

    /// As `find_by_user_and_asset`, on a caller-supplied connection
    pub async fn find_by_user_and_asset_on<C: ConnectionTrait>(
        conn: &C,
        user_id: &str,
        asset_type_id: i32,
    ) -> Result<Option<Model>, DbError> {
        Wallet::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AssetTypeId.eq(asset_type_id))
            .one(conn)
            .await
            .map_err(Into::into)
    }

    /// Acquires exclusive row locks on both wallets and returns their
    /// post-lock state, in the order the ids were passed.
    ///
    /// Locks are always taken in ascending wallet-id order. Every concurrent
    /// transaction touching the same pair obeys the same total order, so
    /// hold-and-wait cycles cannot form.
    pub async fn lock_pair_on<C: ConnectionTrait>(
        conn: &C,
        first_id: i64,
        second_id: i64,
    ) -> Result<(Model, Model), DbError> {
        let (lo, hi) = if first_id <= second_id {
            (first_id, second_id)
        } else {
            (second_id, first_id)
        };

        let lo_row = Self::lock_one(conn, lo).await?;
        let hi_row = Self::lock_one(conn, hi).await?;

        if first_id == lo {
            Ok((lo_row, hi_row))
        } else {
            Ok((hi_row, lo_row))
        }
    }

    /// SELECT ... FOR UPDATE on one wallet row. The row returned reflects
    /// every transaction that committed before the lock was granted.
    async fn lock_one<C: ConnectionTrait>(conn: &C, wallet_id: i64) -> Result<Model, DbError> {
        Wallet::find_by_id(wallet_id)
            .lock_exclusive()
            .one(conn)
            .await?
            .ok_or_else(|| DbError::QueryError(format!("wallet {} vanished under lock", wallet_id)))
    }

    /// Applies both balance deltas and returns the new user balance. Both
    /// rows must already be locked via `lock_pair_on`.
    ///
    /// The non-negative rule for user wallets is enforced here, before any
    /// write: a delta that would drive the user balance below zero fails
    /// with `DbError::BalanceUnderflow` and leaves both rows untouched. Only
    /// the user side is bounded; the treasury absorbs credits and may go
    /// negative.
    pub async fn apply_deltas_on<C: ConnectionTrait>(
        conn: &C,
        user: Model,
        treasury: Model,
        user_delta: i64,
        treasury_delta: i64,
    ) -> Result<i64, DbError> {
        let new_user_balance = user.balance + user_delta;
        if new_user_balance < 0 {
            return Err(DbError::BalanceUnderflow(format!(
                "wallet {} balance {} cannot absorb delta {}",
                user.id, user.balance, user_delta
            )));
        }
        let new_treasury_balance = treasury.balance + treasury_delta;

        let mut user_update: ActiveModel = user.into();
        user_update.balance = Set(new_user_balance);
        user_update.update(conn).await?;

        let mut treasury_update: ActiveModel = treasury.into();
        treasury_update.balance = Set(new_treasury_balance);
        treasury_update.update(conn).await?;

        Ok(new_user_balance)
    }
}
