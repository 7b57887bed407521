use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::error::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Reserved user id owning the counterparty wallet of every asset
const TREASURY_USER_ID: &str = "SYSTEM_TREASURY";

/// Supported assets: (code, display name, treasury starting balance)
const ASSET_SEED: &[(&str, &str, i64)] = &[
    ("GOLD_COIN", "Gold Coins", 1_000_000),
    ("DIAMOND", "Diamonds", 100_000),
    ("LOYALTY_POINT", "Loyalty Points", 10_000_000),
];

/// Demo wallets: (user_id, asset code, starting balance)
const USER_WALLET_SEED: &[(&str, &str, i64)] = &[
    ("user_123", "GOLD_COIN", 100),
    ("user_123", "DIAMOND", 10),
    ("user_123", "LOYALTY_POINT", 500),
    ("user_456", "GOLD_COIN", 50),
    ("user_456", "DIAMOND", 5),
];

/// Execute the seed command. Safe to run repeatedly; rows that already exist
/// are left untouched.
pub async fn execute() -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env();

    info!("Connecting to database: {}", config.url);
    let connection = Database::connect(&config.url).await?;

    for (code, name, _) in ASSET_SEED {
        connection
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "INSERT INTO asset_types (code, name) VALUES ($1, $2) \
                 ON CONFLICT (code) DO NOTHING",
                [(*code).into(), (*name).into()],
            ))
            .await?;
    }
    info!("Asset types ensured");

    let mut created = 0;
    for (code, _, treasury_balance) in ASSET_SEED {
        created += ensure_wallet(&connection, TREASURY_USER_ID, code, *treasury_balance).await?;
    }
    for (user_id, code, balance) in USER_WALLET_SEED {
        created += ensure_wallet(&connection, user_id, code, *balance).await?;
    }

    if created > 0 {
        info!("Seeded {} new wallets", created);
    } else {
        info!("Database already seeded");
    }

    Ok(())
}

/// Inserts a wallet with a starting balance unless one already exists for
/// the (user, asset) pair. Returns the number of rows created.
async fn ensure_wallet(
    connection: &DatabaseConnection,
    user_id: &str,
    asset_code: &str,
    balance: i64,
) -> Result<u64, Box<dyn Error>> {
    let result = connection
        .execute(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "INSERT INTO wallets (user_id, asset_type_id, balance) \
             SELECT $1, id, $2 FROM asset_types WHERE code = $3 \
             ON CONFLICT (user_id, asset_type_id) DO NOTHING",
            [user_id.into(), balance.into(), asset_code.into()],
        ))
        .await?;

    Ok(result.rows_affected())
}
