use std::sync::Arc;

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::db::error::DbError;
use crate::entity::asset_types::{Column, Entity as AssetType, Model};

/// Repository for asset type reference data
#[derive(Clone)]
pub struct AssetRepository {
    db: Arc<DatabaseConnection>,
}

impl AssetRepository {
    /// Create a new asset repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an asset type by its canonical code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Model>, DbError> {
        Self::find_by_code_on(self.db.as_ref(), code).await
    }

    /// As `find_by_code`, on a caller-supplied connection. The transaction
    /// engine resolves reference data through its own transaction.
    pub async fn find_by_code_on<C: ConnectionTrait>(
        conn: &C,
        code: &str,
    ) -> Result<Option<Model>, DbError> {
        AssetType::find()
            .filter(Column::Code.eq(code))
            .one(conn)
            .await
            .map_err(Into::into)
    }
}
