use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecoveryCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecoveryCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecoveryCodes::Email).string().not_null())
                    .col(ColumnDef::new(RecoveryCodes::Code).string().not_null())
                    .col(
                        ColumnDef::new(RecoveryCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecoveryCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(RecoveryCodes::Table)
                    .col(RecoveryCodes::Email)
                    .name("idx_recovery_codes_email")
                    .to_owned(),
            )
            .await?;

        // Supports periodic cleanup of expired rows (e.g. a cron DELETE).
        manager
            .create_index(
                Index::create()
                    .table(RecoveryCodes::Table)
                    .col(RecoveryCodes::ExpiresAt)
                    .name("idx_recovery_codes_expires_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecoveryCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RecoveryCodes {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    CreatedAt,
}
