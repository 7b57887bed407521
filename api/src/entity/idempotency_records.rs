use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Idempotency record scoped to (key, user). The composite primary key is
/// what turns a concurrent double-submit into a unique violation for the
/// losing transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "idempotency_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// SHA-256 hex digest of the canonical request payload
    pub request_hash: String,
    /// The exact serialized success response body
    pub response_payload: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
