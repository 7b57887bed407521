use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use crate::db::error::DbError;
use crate::entity::idempotency_records::{ActiveModel, Column, Entity as IdempotencyRecord, Model};

/// Repository for idempotency records keyed by (key, user_id)
#[derive(Clone)]
pub struct IdempotencyRepository {
    db: Arc<DatabaseConnection>,
}

impl IdempotencyRepository {
    /// Create a new idempotency repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up a record against the pool, outside any caller transaction.
    /// Used after a duplicate-key rollback to read the racing winner's row.
    pub async fn lookup(&self, key: &str, user_id: &str) -> Result<Option<Model>, DbError> {
        Self::lookup_on(self.db.as_ref(), key, user_id).await
    }

    /// Looks up a record on a caller-supplied connection
    pub async fn lookup_on<C: ConnectionTrait>(
        conn: &C,
        key: &str,
        user_id: &str,
    ) -> Result<Option<Model>, DbError> {
        IdempotencyRecord::find()
            .filter(Column::Key.eq(key))
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new record. The composite primary key turns a concurrent
    /// double-insert into `DbError::DuplicateKey` for exactly one caller.
    pub async fn insert_on<C: ConnectionTrait>(
        conn: &C,
        key: &str,
        user_id: &str,
        request_hash: &str,
        response_payload: &str,
    ) -> Result<(), DbError> {
        let record = ActiveModel {
            key: Set(key.to_owned()),
            user_id: Set(user_id.to_owned()),
            request_hash: Set(request_hash.to_owned()),
            response_payload: Set(response_payload.to_owned()),
            created_at: Set(Utc::now()),
        };

        record.insert(conn).await?;
        Ok(())
    }
}
