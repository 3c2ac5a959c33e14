//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Each method is a
//! single statement; none of them opens a transaction.

use sea_orm::{ColumnTrait, EntityTrait, ExprTrait, QueryFilter, sea_query::Expr};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{
    changes_to_active_model, click_to_active_model, game_to_active_model,
    status_check_to_active_model,
};
use crate::errors::{GameHubError, Result};
use crate::storage::{DownloadClick, Game, GameChanges, StatusCheck};

use migration::entities::{download_click, game, status_check};

impl SeaOrmStorage {
    pub async fn insert_game(&self, game: &Game) -> Result<()> {
        game::Entity::insert(game_to_active_model(game))
            .exec(&self.db)
            .await
            .map_err(|e| {
                GameHubError::database_operation(format!(
                    "插入游戏 '{}' 失败 (title: {}): {}",
                    game.id, game.title, e
                ))
            })?;

        info!("Game inserted: {}", game.id);
        Ok(())
    }

    /// 只写入 `changes` 中出现的字段，返回受影响行数
    pub async fn update_game(&self, id: &str, changes: &GameChanges) -> Result<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        let result = game::Entity::update_many()
            .set(changes_to_active_model(changes))
            .filter(game::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("更新游戏失败: {}", e)))?;

        debug!("Game {} updated ({} rows)", id, result.rows_affected);
        Ok(result.rows_affected)
    }

    /// 原子自增点击数（`clicks = clicks + 1`），返回受影响行数
    pub async fn increment_clicks(&self, id: &str) -> Result<u64> {
        let result = game::Entity::update_many()
            .col_expr(
                game::Column::Clicks,
                Expr::col(game::Column::Clicks).add(1),
            )
            .filter(game::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("更新点击数失败: {}", e)))?;

        Ok(result.rows_affected)
    }

    /// 删除游戏，返回受影响行数（0 表示不存在）
    pub async fn delete_game(&self, id: &str) -> Result<u64> {
        let result = game::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("删除游戏失败: {}", e)))?;

        if result.rows_affected > 0 {
            info!("Game deleted: {}", id);
        }
        Ok(result.rows_affected)
    }

    /// 删除某个游戏的全部点击事件，返回删除数量
    pub async fn delete_clicks_for_game(&self, game_id: &str) -> Result<u64> {
        let result = download_click::Entity::delete_many()
            .filter(download_click::Column::GameId.eq(game_id))
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("删除点击事件失败: {}", e)))?;

        Ok(result.rows_affected)
    }

    pub async fn insert_click(&self, click: &DownloadClick) -> Result<()> {
        download_click::Entity::insert(click_to_active_model(click))
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("记录点击事件失败: {}", e)))?;
        Ok(())
    }

    pub async fn insert_status_check(&self, check: &StatusCheck) -> Result<()> {
        status_check::Entity::insert(status_check_to_active_model(check))
            .exec(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("记录状态检查失败: {}", e)))?;
        Ok(())
    }
}
