use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::{DownloadClick, Game, GameChanges, StatusCheck};
use migration::entities::{download_click, game, status_check};

/// 将 Sea-ORM Model 转换为 Game
pub fn model_to_game(model: game::Model) -> Game {
    Game {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        download_link: model.download_link,
        category: model.category,
        clicks: model.clicks.max(0) as u64,
        date_added: model.date_added,
    }
}

/// 将 Game 转换为 ActiveModel（用于插入）
pub fn game_to_active_model(game: &Game) -> game::ActiveModel {
    game::ActiveModel {
        id: Set(game.id.clone()),
        title: Set(game.title.clone()),
        description: Set(game.description.clone()),
        image: Set(game.image.clone()),
        download_link: Set(game.download_link.clone()),
        category: Set(game.category.clone()),
        clicks: Set(game.clicks as i64),
        date_added: Set(game.date_added),
    }
}

/// 将部分更新转换为 ActiveModel，未提供的字段保持 NotSet
pub fn changes_to_active_model(changes: &GameChanges) -> game::ActiveModel {
    fn patch(value: &Option<String>) -> sea_orm::ActiveValue<String> {
        match value {
            Some(v) => Set(v.clone()),
            None => NotSet,
        }
    }

    game::ActiveModel {
        id: NotSet,
        title: patch(&changes.title),
        description: patch(&changes.description),
        image: patch(&changes.image),
        download_link: patch(&changes.download_link),
        category: patch(&changes.category),
        clicks: NotSet,
        date_added: NotSet,
    }
}

pub fn model_to_click(model: download_click::Model) -> DownloadClick {
    DownloadClick {
        id: model.id,
        game_id: model.game_id,
        game_title: model.game_title,
        timestamp: model.timestamp,
    }
}

pub fn click_to_active_model(click: &DownloadClick) -> download_click::ActiveModel {
    download_click::ActiveModel {
        id: Set(click.id.clone()),
        game_id: Set(click.game_id.clone()),
        game_title: Set(click.game_title.clone()),
        timestamp: Set(click.timestamp),
    }
}

pub fn model_to_status_check(model: status_check::Model) -> StatusCheck {
    StatusCheck {
        id: model.id,
        client_name: model.client_name,
        timestamp: model.timestamp,
    }
}

pub fn status_check_to_active_model(check: &StatusCheck) -> status_check::ActiveModel {
    status_check::ActiveModel {
        id: Set(check.id.clone()),
        client_name: Set(check.client_name.clone()),
        timestamp: Set(check.timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::ActiveValue;

    fn create_test_model() -> game::Model {
        game::Model {
            id: "5f0c2b1e-0000-4000-8000-000000000001".to_string(),
            title: "Chess".to_string(),
            description: "Classic strategy".to_string(),
            image: "/img/chess.png".to_string(),
            download_link: "https://example.com/chess.zip".to_string(),
            category: "Board".to_string(),
            clicks: 42,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_game_basic() {
        let model = create_test_model();
        let expected_id = model.id.clone();

        let game = model_to_game(model);

        assert_eq!(game.id, expected_id);
        assert_eq!(game.title, "Chess");
        assert_eq!(game.download_link, "https://example.com/chess.zip");
        assert_eq!(game.clicks, 42);
    }

    #[test]
    fn test_model_to_game_negative_clicks() {
        let model = game::Model {
            clicks: -10, // 负数应该被转换为 0
            ..create_test_model()
        };

        let game = model_to_game(model);
        assert_eq!(game.clicks, 0);
    }

    #[test]
    fn test_game_to_active_model_sets_every_column() {
        let game = model_to_game(create_test_model());
        let active_model = game_to_active_model(&game);

        assert!(matches!(active_model.id, ActiveValue::Set(_)));
        assert!(matches!(active_model.title, ActiveValue::Set(_)));
        assert!(matches!(active_model.download_link, ActiveValue::Set(_)));
        assert!(matches!(active_model.date_added, ActiveValue::Set(_)));
        if let ActiveValue::Set(clicks) = active_model.clicks {
            assert_eq!(clicks, 42);
        }
    }

    #[test]
    fn test_changes_to_active_model_only_sets_present_fields() {
        let changes = GameChanges {
            title: Some("Chess 2".to_string()),
            category: Some(String::new()),
            ..Default::default()
        };
        let active_model = changes_to_active_model(&changes);

        assert!(matches!(active_model.title, ActiveValue::Set(ref t) if t == "Chess 2"));
        assert!(matches!(active_model.category, ActiveValue::Set(ref c) if c.is_empty()));
        assert!(matches!(active_model.description, ActiveValue::NotSet));
        assert!(matches!(active_model.image, ActiveValue::NotSet));
        assert!(matches!(active_model.download_link, ActiveValue::NotSet));
        // id / clicks / date_added 永远不会被部分更新改写
        assert!(matches!(active_model.id, ActiveValue::NotSet));
        assert!(matches!(active_model.clicks, ActiveValue::NotSet));
        assert!(matches!(active_model.date_added, ActiveValue::NotSet));
    }

    #[test]
    fn test_click_conversion() {
        let model = download_click::Model {
            id: "c1".to_string(),
            game_id: "g1".to_string(),
            game_title: "Go".to_string(),
            timestamp: Utc::now(),
        };
        let click = model_to_click(model.clone());
        assert_eq!(click.game_id, "g1");
        assert_eq!(click.game_title, "Go");

        let active_model = click_to_active_model(&click);
        if let ActiveValue::Set(ts) = active_model.timestamp {
            assert_eq!(ts, model.timestamp);
        }
    }

    #[test]
    fn test_status_check_conversion() {
        let model = status_check::Model {
            id: "s1".to_string(),
            client_name: "uptime-monitor".to_string(),
            timestamp: Utc::now(),
        };
        let check = model_to_status_check(model);
        assert_eq!(check.client_name, "uptime-monitor");
        let active_model = status_check_to_active_model(&check);
        assert!(matches!(active_model.client_name, ActiveValue::Set(ref n) if n == "uptime-monitor"));
    }
}
