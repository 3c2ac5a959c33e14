//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.
//!
//! Every method maps to a single statement. Multi-step flows (cascade delete,
//! increment then log) are sequenced by the service layer without a
//! transaction.

mod connection;
mod converters;
mod mutations;
mod query;

use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::errors::{GameHubError, Result};

pub use converters::{
    click_to_active_model, game_to_active_model, model_to_click, model_to_game,
    model_to_status_check, status_check_to_active_model,
};

/// 关闭连接池的超时时间（秒）
const CLOSE_TIMEOUT_SECS: u64 = 10;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(GameHubError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 游戏列表过滤条件
#[derive(Default, Clone, Debug)]
pub struct GameFilter {
    /// 分类精确匹配
    pub category: Option<String>,
}

/// SeaORM-based storage backend
///
/// Cloning is cheap: the underlying connection is a shared pool.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url.trim();
        if database_url.is_empty() {
            return Err(GameHubError::database_config(
                "database_url 未设置".to_string(),
            ));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        let db = connection::open_connection(config, &backend_name).await?;
        connection::apply_migrations(&db).await?;

        let storage = SeaOrmStorage { db, backend_name };

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 后端名称：sqlite / mysql / postgres
    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 关闭连接池（进程退出前调用）
    pub async fn close(&self) -> Result<()> {
        let db = self.db.clone();
        match tokio::time::timeout(Duration::from_secs(CLOSE_TIMEOUT_SECS), db.close()).await {
            Ok(Ok(())) => {
                info!(
                    "{} connection pool closed",
                    self.backend_name.to_uppercase()
                );
                Ok(())
            }
            Ok(Err(e)) => Err(GameHubError::database_connection(format!(
                "关闭数据库连接失败: {}",
                e
            ))),
            Err(_) => Err(GameHubError::database_connection(format!(
                "关闭数据库连接超时 ({}s)",
                CLOSE_TIMEOUT_SECS
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(infer_backend_from_url("sqlite://gamehub.db?mode=rwc").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("sqlite::memory:").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("data/games.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("mysql://u:p@localhost/db").unwrap(), "mysql");
        assert_eq!(infer_backend_from_url("mariadb://localhost/db").unwrap(), "mysql");
        assert_eq!(infer_backend_from_url("postgres://localhost/db").unwrap(), "postgres");
        assert_eq!(infer_backend_from_url("postgresql://localhost/db").unwrap(), "postgres");
    }

    #[test]
    fn test_infer_backend_rejects_unknown_scheme() {
        let err = infer_backend_from_url("mongodb://localhost:27017").unwrap_err();
        assert!(matches!(err, GameHubError::DatabaseConfig(_)));
    }
}
