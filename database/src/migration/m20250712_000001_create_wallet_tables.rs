use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Asset types: reference data, one row per supported virtual currency
        manager
            .create_table(
                Table::create()
                    .table(AssetTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssetTypes::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(AssetTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(AssetTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Wallets: one balance per (user, asset); the id is the lock ordering key
        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wallets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wallets::UserId).string().not_null())
                    .col(ColumnDef::new(Wallets::AssetTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(Wallets::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Wallets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallets_asset_type_id")
                            .from(Wallets::Table, Wallets::AssetTypeId)
                            .to(AssetTypes::Table, AssetTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One wallet per (user, asset); also the conflict target for seeding
        manager
            .create_index(
                Index::create()
                    .name("idx_wallets_user_asset")
                    .table(Wallets::Table)
                    .col(Wallets::UserId)
                    .col(Wallets::AssetTypeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Ledger entries: immutable double-entry audit records
        manager
            .create_table(
                Table::create()
                    .table(LedgerEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LedgerEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LedgerEntries::TransactionId).string().not_null())
                    .col(ColumnDef::new(LedgerEntries::WalletId).big_integer().not_null())
                    .col(ColumnDef::new(LedgerEntries::Amount).big_integer().not_null())
                    .col(ColumnDef::new(LedgerEntries::Reason).string().not_null())
                    .col(
                        ColumnDef::new(LedgerEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ledger_entries_wallet_id")
                            .from(LedgerEntries::Table, LedgerEntries::WalletId)
                            .to(Wallets::Table, Wallets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on transaction_id to find the paired entries of one transaction
        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entries_transaction_id")
                    .table(LedgerEntries::Table)
                    .col(LedgerEntries::TransactionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Index for the newest-first per-wallet history read
        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entries_wallet_created")
                    .table(LedgerEntries::Table)
                    .col(LedgerEntries::WalletId)
                    .col(LedgerEntries::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Idempotency records: composite primary key is the dedup arbiter
        manager
            .create_table(
                Table::create()
                    .table(IdempotencyRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(IdempotencyRecords::Key).string().not_null())
                    .col(ColumnDef::new(IdempotencyRecords::UserId).string().not_null())
                    .col(
                        ColumnDef::new(IdempotencyRecords::RequestHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IdempotencyRecords::ResponsePayload)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IdempotencyRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(IdempotencyRecords::Key)
                            .col(IdempotencyRecords::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IdempotencyRecords::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LedgerEntries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wallets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssetTypes::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssetTypes {
    Table,
    Id,
    Code,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Wallets {
    Table,
    Id,
    UserId,
    AssetTypeId,
    Balance,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LedgerEntries {
    Table,
    Id,
    TransactionId,
    WalletId,
    Amount,
    Reason,
    CreatedAt,
}

#[derive(DeriveIden)]
enum IdempotencyRecords {
    Table,
    Key,
    UserId,
    RequestHash,
    ResponsePayload,
    CreatedAt,
}
