use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 games 表（主键为服务端生成的 UUID 字符串）
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).text().not_null())
                    .col(ColumnDef::new(Games::Description).text().not_null())
                    .col(ColumnDef::new(Games::Image).text().not_null())
                    .col(ColumnDef::new(Games::DownloadLink).text().not_null())
                    // 有索引，MySQL 下为 VARCHAR(255)
                    .col(ColumnDef::new(Games::Category).string().not_null())
                    .col(
                        ColumnDef::new(Games::Clicks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 分类过滤索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_games_category")
                    .table(Games::Table)
                    .col(Games::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_games_category").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    #[sea_orm(iden = "games")]
    Table,
    Id,
    Title,
    Description,
    Image,
    DownloadLink,
    Category,
    Clicks,
    DateAdded,
}
