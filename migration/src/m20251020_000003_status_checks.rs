use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusChecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusChecks::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StatusChecks::ClientName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StatusChecks::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusChecks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatusChecks {
    #[sea_orm(iden = "status_checks")]
    Table,
    Id,
    ClientName,
    Timestamp,
}
