//! 下载点击事件表迁移
//!
//! download_clicks 是只追加的事件日志，game_id 不设外键，
//! 级联删除由服务层负责。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DownloadClicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DownloadClicks::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DownloadClicks::GameId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DownloadClicks::GameTitle)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DownloadClicks::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 级联删除按 game_id 查找
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_download_clicks_game_id")
                    .table(DownloadClicks::Table)
                    .col(DownloadClicks::GameId)
                    .to_owned(),
            )
            .await?;

        // 最近活动按时间倒序读取
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_download_clicks_timestamp")
                    .table(DownloadClicks::Table)
                    .col(DownloadClicks::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_download_clicks_timestamp")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_download_clicks_game_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DownloadClicks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DownloadClicks {
    #[sea_orm(iden = "download_clicks")]
    Table,
    Id,
    GameId,
    GameTitle,
    Timestamp,
}
