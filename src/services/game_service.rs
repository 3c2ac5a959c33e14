//! Game catalog service
//!
//! Business logic for the `games` collection and the download-click log
//! attached to it. Handlers call into this service; it never touches HTTP.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, trace, warn};

use super::patch::Patch;
use crate::errors::{GameHubError, Result};
use crate::storage::{DownloadClick, Game, GameChanges, GameFilter, SeaOrmStorage};

/// 列表与统计扫描的最大行数
pub const LIST_LIMIT: u64 = 1000;

// ============ Request DTOs ============

/// Request to create a new game
///
/// All five fields are required; `id`, `clicks` and `dateAdded` are assigned
/// by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreate {
    pub title: String,
    pub description: String,
    pub image: String,
    pub download_link: String,
    pub category: String,
}

/// Request to update an existing game
///
/// Omitted fields stay untouched, explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub image: Patch<String>,
    #[serde(default)]
    pub download_link: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
}

impl GameUpdate {
    /// 转换为要写入的字段集合；任何显式 `null` 都会返回校验错误
    pub fn into_changes(self) -> Result<GameChanges> {
        Ok(GameChanges {
            title: self.title.into_required("title")?,
            description: self.description.into_required("description")?,
            image: self.image.into_required("image")?,
            download_link: self.download_link.into_required("downloadLink")?,
            category: self.category.into_required("category")?,
        })
    }
}

// ============ GameService Implementation ============

pub struct GameService {
    storage: Arc<SeaOrmStorage>,
}

impl GameService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// List games in store order, optionally filtered by category
    pub async fn list_games(&self, filter: GameFilter) -> Result<Vec<Game>> {
        let games = self.storage.list_games(&filter, LIST_LIMIT).await?;
        trace!("GameService: listed {} games", games.len());
        Ok(games)
    }

    pub async fn get_game(&self, id: &str) -> Result<Game> {
        self.storage
            .find_game(id)
            .await?
            .ok_or_else(GameHubError::game_not_found)
    }

    pub async fn create_game(&self, req: GameCreate) -> Result<Game> {
        let game = Game::new(
            req.title,
            req.description,
            req.image,
            req.download_link,
            req.category,
        );

        self.storage.insert_game(&game).await?;

        info!("GameService: created '{}' ({})", game.title, game.id);
        Ok(game)
    }

    /// Apply a partial update and return the record as re-read afterwards
    ///
    /// Existence check, write and re-read are three separate statements.
    pub async fn update_game(&self, id: &str, req: GameUpdate) -> Result<Game> {
        let existing = self.get_game(id).await?;
        let changes = req.into_changes()?;
        if changes.is_empty() {
            trace!("GameService: empty update for '{}'", id);
            return Ok(existing);
        }

        self.storage.update_game(id, &changes).await?;

        // 另一个请求可能在两次查询之间删除了该记录
        let updated = self.get_game(id).await?;
        info!("GameService: updated '{}'", id);
        Ok(updated)
    }

    /// Delete a game, then every download click that references it
    ///
    /// Two statements without a transaction: if the second one fails the
    /// game is gone but orphaned clicks remain.
    pub async fn delete_game(&self, id: &str) -> Result<()> {
        let deleted = self.storage.delete_game(id).await?;
        if deleted == 0 {
            return Err(GameHubError::game_not_found());
        }

        let clicks = self.storage.delete_clicks_for_game(id).await?;
        info!(
            "GameService: deleted '{}' and {} download clicks",
            id, clicks
        );
        Ok(())
    }

    /// Increment the click counter and append a download click
    ///
    /// The click carries the title read before the increment. The increment
    /// and the insert are not atomic with each other.
    pub async fn record_download(&self, id: &str) -> Result<()> {
        let game = self.get_game(id).await?;

        let affected = self.storage.increment_clicks(id).await?;
        if affected == 0 {
            warn!("GameService: '{}' vanished before its click was counted", id);
            return Err(GameHubError::game_not_found());
        }

        self.storage
            .insert_click(&DownloadClick::for_game(&game))
            .await?;

        info!("GameService: download recorded for '{}'", id);
        Ok(())
    }
}
