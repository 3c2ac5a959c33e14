//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::{debug, error};

use super::converters::{model_to_click, model_to_game, model_to_status_check};
use super::{GameFilter, SeaOrmStorage};
use crate::errors::{GameHubError, Result};
use crate::storage::{DownloadClick, Game, StatusCheck};

use migration::entities::{download_click, game, status_check};

impl SeaOrmStorage {
    /// 按服务端 id 获取单个游戏
    pub async fn find_game(&self, id: &str) -> Result<Option<Game>> {
        game::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map(|model| model.map(model_to_game))
            .map_err(|e| {
                error!("查询游戏失败: {}", e);
                GameHubError::database_operation(format!("查询游戏 '{}' 失败: {}", id, e))
            })
    }

    /// 加载游戏列表（不排序，按存储迭代顺序，最多 `limit` 条）
    pub async fn list_games(&self, filter: &GameFilter, limit: u64) -> Result<Vec<Game>> {
        let mut query = game::Entity::find();

        if let Some(ref category) = filter.category {
            query = query.filter(game::Column::Category.eq(category.as_str()));
        }

        let models = query.limit(limit).all(&self.db).await.map_err(|e| {
            error!("加载游戏列表失败: {}", e);
            GameHubError::database_operation(format!("加载游戏列表失败: {}", e))
        })?;

        debug!("Loaded {} games", models.len());
        Ok(models.into_iter().map(model_to_game).collect())
    }

    /// 最近的下载点击，按时间倒序
    pub async fn recent_clicks(&self, limit: u64) -> Result<Vec<DownloadClick>> {
        let models = download_click::Entity::find()
            .order_by_desc(download_click::Column::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("加载最近点击失败: {}", e);
                GameHubError::database_operation(format!("加载最近点击失败: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_click).collect())
    }

    /// 某个游戏的点击事件数量
    pub async fn count_clicks_for_game(&self, game_id: &str) -> Result<u64> {
        download_click::Entity::find()
            .filter(download_click::Column::GameId.eq(game_id))
            .count(&self.db)
            .await
            .map_err(|e| GameHubError::database_operation(format!("统计点击事件失败: {}", e)))
    }

    /// 加载状态检查记录（不排序，最多 `limit` 条）
    pub async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>> {
        let models = status_check::Entity::find()
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("加载状态检查失败: {}", e);
                GameHubError::database_operation(format!("加载状态检查失败: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_status_check).collect())
    }
}
