use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生成服务端标识符（与数据库内部 ID 无关）
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// 游戏目录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub download_link: String,
    pub category: String,
    #[serde(default)]
    pub clicks: u64,
    pub date_added: DateTime<Utc>,
}

impl Game {
    /// 创建新游戏：生成 id 与 dateAdded，点击数从 0 开始
    pub fn new(
        title: String,
        description: String,
        image: String,
        download_link: String,
        category: String,
    ) -> Self {
        Self {
            id: generate_id(),
            title,
            description,
            image,
            download_link,
            category,
            clicks: 0,
            date_added: Utc::now(),
        }
    }
}

/// 下载点击事件（不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadClick {
    pub id: String,
    pub game_id: String,
    /// 点击时的游戏标题快照，之后改名不会同步
    pub game_title: String,
    pub timestamp: DateTime<Utc>,
}

impl DownloadClick {
    pub fn for_game(game: &Game) -> Self {
        Self {
            id: generate_id(),
            game_id: game.id.clone(),
            game_title: game.title.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// 诊断用状态检查记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: generate_id(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

/// 部分更新时要写入的字段，`None` 表示保持不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub download_link: Option<String>,
    pub category: Option<String>,
}

impl GameChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.download_link.is_none()
            && self.category.is_none()
    }
}
