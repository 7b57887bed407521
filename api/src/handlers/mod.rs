// API endpoint handlers implementation

mod balance;
mod health;
mod root;
mod transact;
mod transactions;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::db::Repositories;

// Handler function re-exports
pub use balance::get_balance;
pub use health::health_check;
pub use root::service_info;
pub use transact::transact;
pub use transactions::get_transactions;

/// Application state containing the connection pool and repositories
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub repositories: Arc<Repositories>,
}
