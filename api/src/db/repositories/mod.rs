// Database repository management

mod asset_repository;
mod idempotency_repository;
mod ledger_repository;
mod wallet_repository;

pub use asset_repository::AssetRepository;
pub use idempotency_repository::IdempotencyRepository;
pub use ledger_repository::LedgerRepository;
pub use wallet_repository::WalletRepository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
///
/// Repositories answer plain reads against the pool through their `&self`
/// methods. Anything that must run inside the transaction engine's database
/// transaction is exposed as an associated `*_on` function taking the
/// caller's connection; the engine alone opens and commits transactions.
pub struct Repositories {
    pub asset: AssetRepository,
    pub wallet: WalletRepository,
    pub ledger: LedgerRepository,
    pub idempotency: IdempotencyRepository,
}

impl Repositories {
    /// Creates a new repositories container sharing one connection pool
    pub fn new(conn: DatabaseConnection) -> Self {
        let db = Arc::new(conn);
        Repositories {
            asset: AssetRepository::new(db.clone()),
            wallet: WalletRepository::new(db.clone()),
            ledger: LedgerRepository::new(db.clone()),
            idempotency: IdempotencyRepository::new(db),
        }
    }
}
