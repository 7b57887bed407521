use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference data for one supported virtual currency. Rows are inserted by
/// seeding and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Canonical uppercase code, e.g. GOLD_COIN
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
