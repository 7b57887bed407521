use std::sync::Arc;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::error::DbError;
use crate::entity::ledger_entries::{ActiveModel, Column, Entity as LedgerEntry, Model};

/// Repository for the immutable double-entry ledger
#[derive(Clone)]
pub struct LedgerRepository {
    db: Arc<DatabaseConnection>,
}

impl LedgerRepository {
    /// Create a new ledger repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All entries for a wallet, newest first; id breaks created_at ties
    pub async fn find_by_wallet(&self, wallet_id: i64) -> Result<Vec<Model>, DbError> {
        LedgerEntry::find()
            .filter(Column::WalletId.eq(wallet_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Writes the two offsetting entries of one transaction in a single
    /// insert. Entries are insert-only; nothing in the service updates or
    /// deletes them.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_pair_on<C: ConnectionTrait>(
        conn: &C,
        transaction_id: &str,
        reason: &str,
        user_wallet_id: i64,
        user_amount: i64,
        treasury_wallet_id: i64,
        treasury_amount: i64,
    ) -> Result<(), DbError> {
        let now = chrono::Utc::now();
        let entries = vec![
            ActiveModel {
                transaction_id: Set(transaction_id.to_owned()),
                wallet_id: Set(user_wallet_id),
                amount: Set(user_amount),
                reason: Set(reason.to_owned()),
                created_at: Set(now),
                ..Default::default()
            },
            ActiveModel {
                transaction_id: Set(transaction_id.to_owned()),
                wallet_id: Set(treasury_wallet_id),
                amount: Set(treasury_amount),
                reason: Set(reason.to_owned()),
                created_at: Set(now),
                ..Default::default()
            },
        ];

        LedgerEntry::insert_many(entries).exec(conn).await?;
        Ok(())
    }
}
