use sea_orm::Database;
use sea_orm_migration::prelude::*;
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::migration::Migrator;

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env();

    info!("Connecting to database: {}", config.url);

    let connection = match Database::connect(&config.url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(Box::new(e));
        }
    };

    info!("Running migrations...");

    match steps {
        Some(n) => {
            info!("Running {} migrations", n);
            Migrator::up(&connection, Some(n)).await?;
        }
        None => {
            info!("Running all pending migrations");
            Migrator::up(&connection, None).await?;
        }
    }

    info!("Migrations complete");
    Ok(())
}

/// Drop every table and reapply all migrations
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env();

    info!("Connecting to database: {}", config.url);
    let connection = Database::connect(&config.url).await?;

    info!("Resetting database...");
    Migrator::fresh(&connection).await?;

    info!("Database reset complete");
    Ok(())
}

/// Show the status of all migrations
pub async fn status() -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env();

    let connection = Database::connect(&config.url).await?;
    Migrator::status(&connection).await?;

    Ok(())
}
