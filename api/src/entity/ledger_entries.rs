use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Immutable audit record. Each transaction id is shared by exactly two
/// entries whose amounts sum to zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub transaction_id: String,
    pub wallet_id: i64,
    /// Signed: positive credits the wallet, negative debits it
    pub amount: i64,
    /// TOPUP, BONUS or SPEND
    pub reason: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
