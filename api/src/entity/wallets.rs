use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One balance per (user, asset) pair. The row id doubles as the lock
/// ordering key for the transaction engine's pairwise row locks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub asset_type_id: i32,
    /// Signed integer in the asset's smallest unit. Non-negative for user
    /// wallets; the treasury wallet may go negative.
    pub balance: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
