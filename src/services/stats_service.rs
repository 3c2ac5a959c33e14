//! Read-time statistics over games and download clicks
//!
//! Nothing here is cached; every call scans the catalog again.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;

use super::game_service::LIST_LIMIT;
use crate::errors::Result;
use crate::storage::{DownloadClick, Game, GameFilter, SeaOrmStorage};

/// 参与最近活动统计的点击事件数
pub const RECENT_CLICKS_LIMIT: u64 = 10;

/// 最近活动最多保留的分组数
pub const RECENT_ACTIVITY_GROUPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopGame {
    pub title: String,
    pub clicks: u64,
}

impl TopGame {
    fn none() -> Self {
        Self {
            title: "N/A".to_string(),
            clicks: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivity {
    /// 点击时记录的游戏标题
    pub game: String,
    pub clicks: u64,
    /// 该分组中最新一次点击的时间
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_games: u64,
    pub total_downloads: u64,
    pub top_game: TopGame,
    pub recent_activity: Vec<RecentActivity>,
}

/// Fold loaded games and recent clicks into [`Stats`]
///
/// `recent_clicks` must already be ordered newest first. Ties for the top game
/// go to the earliest game in `games`.
pub fn aggregate_stats(games: &[Game], recent_clicks: &[DownloadClick]) -> Stats {
    let total_downloads = games.iter().map(|g| g.clicks).sum();

    let top_game = games
        .iter()
        .fold(None::<&Game>, |best, game| match best {
            Some(b) if b.clicks >= game.clicks => Some(b),
            _ => Some(game),
        })
        .map(|g| TopGame {
            title: g.title.clone(),
            clicks: g.clicks,
        })
        .unwrap_or_else(TopGame::none);

    Stats {
        total_games: games.len() as u64,
        total_downloads,
        top_game,
        recent_activity: group_recent_activity(recent_clicks),
    }
}

/// 按 gameTitle 分组，保持首次出现的顺序，最多保留 5 组
fn group_recent_activity(clicks: &[DownloadClick]) -> Vec<RecentActivity> {
    let mut groups: Vec<RecentActivity> = Vec::new();

    for click in clicks {
        match groups.iter_mut().find(|g| g.game == click.game_title) {
            Some(group) => group.clicks += 1,
            None => groups.push(RecentActivity {
                game: click.game_title.clone(),
                clicks: 1,
                timestamp: click.timestamp,
            }),
        }
    }

    groups.truncate(RECENT_ACTIVITY_GROUPS);
    groups
}

pub struct StatsService {
    storage: Arc<SeaOrmStorage>,
}

impl StatsService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    pub async fn get_stats(&self) -> Result<Stats> {
        let games = self
            .storage
            .list_games(&GameFilter::default(), LIST_LIMIT)
            .await?;
        let recent = self.storage.recent_clicks(RECENT_CLICKS_LIMIT).await?;

        let stats = aggregate_stats(&games, &recent);
        trace!(
            "StatsService: {} games, {} downloads",
            stats.total_games, stats.total_downloads
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn game(title: &str, clicks: u64) -> Game {
        let mut g = Game::new(
            title.to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Board".to_string(),
        );
        g.clicks = clicks;
        g
    }

    fn click(title: &str, minutes_ago: i64) -> DownloadClick {
        DownloadClick {
            id: crate::storage::models::generate_id(),
            game_id: format!("id-{}", title),
            game_title: title.to_string(),
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let stats = aggregate_stats(&[], &[]);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.total_downloads, 0);
        assert_eq!(stats.top_game, TopGame::none());
        assert!(stats.recent_activity.is_empty());
    }

    #[test]
    fn test_totals_and_top_game() {
        let games = vec![game("Go", 1), game("Chess", 3)];
        let stats = aggregate_stats(&games, &[]);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.total_downloads, 4);
        assert_eq!(stats.top_game.title, "Chess");
        assert_eq!(stats.top_game.clicks, 3);
    }

    #[test]
    fn test_top_game_tie_keeps_first() {
        let games = vec![game("Go", 2), game("Chess", 2), game("Shogi", 1)];
        let stats = aggregate_stats(&games, &[]);
        assert_eq!(stats.top_game.title, "Go");
    }

    #[test]
    fn test_top_game_with_all_zero_clicks() {
        let games = vec![game("Go", 0), game("Chess", 0)];
        let stats = aggregate_stats(&games, &[]);
        assert_eq!(stats.top_game.title, "Go");
        assert_eq!(stats.top_game.clicks, 0);
    }

    #[test]
    fn test_recent_activity_groups_in_first_seen_order() {
        let clicks = vec![
            click("Chess", 1),
            click("Go", 2),
            click("Chess", 3),
            click("Chess", 4),
        ];
        let stats = aggregate_stats(&[], &clicks);

        assert_eq!(stats.recent_activity.len(), 2);
        assert_eq!(stats.recent_activity[0].game, "Chess");
        assert_eq!(stats.recent_activity[0].clicks, 3);
        assert_eq!(stats.recent_activity[0].timestamp, clicks[0].timestamp);
        assert_eq!(stats.recent_activity[1].game, "Go");
        assert_eq!(stats.recent_activity[1].clicks, 1);
    }

    #[test]
    fn test_recent_activity_keeps_five_groups() {
        let clicks: Vec<_> = ["A", "B", "C", "D", "E", "F", "A"]
            .iter()
            .enumerate()
            .map(|(i, t)| click(t, i as i64))
            .collect();
        let stats = aggregate_stats(&[], &clicks);

        let titles: Vec<_> = stats.recent_activity.iter().map(|a| a.game.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(stats.recent_activity[0].clicks, 2);
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = aggregate_stats(&[game("Chess", 3)], &[click("Chess", 0)]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalGames"], 1);
        assert_eq!(json["totalDownloads"], 3);
        assert_eq!(json["topGame"]["title"], "Chess");
        assert_eq!(json["recentActivity"][0]["game"], "Chess");
        assert!(json["recentActivity"][0]["timestamp"].is_string());
    }
}
