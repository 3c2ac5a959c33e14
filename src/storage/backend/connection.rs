use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::errors::{GameHubError, Result};
use migration::{Migrator, MigratorTrait};

/// 按后端类型打开连接池
pub(super) async fn open_connection(
    config: &DatabaseConfig,
    backend_name: &str,
) -> Result<DatabaseConnection> {
    let url = config.database_url.trim();
    let timeout = Duration::from_secs(config.timeout);

    if backend_name == "sqlite" {
        return open_sqlite(url, config.pool_size, timeout).await;
    }

    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(config.pool_size)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        GameHubError::database_connection(format!(
            "{} connect failed: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// SQLite：文件不存在时创建，WAL 模式下读写不互相阻塞
async fn open_sqlite(url: &str, pool_size: u32, timeout: Duration) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(url)
        .map_err(|e| GameHubError::database_config(format!("invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(pool_size)
        .acquire_timeout(timeout)
        .connect_with(opt)
        .await
        .map_err(|e| GameHubError::database_connection(format!("SQLite connect failed: {}", e)))?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 应用全部未执行的迁移
pub(super) async fn apply_migrations(db: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .map_err(|e| GameHubError::database_operation(format!("migration status: {}", e)))?;
    if pending.is_empty() {
        debug!("Schema is up to date");
        return Ok(());
    }

    Migrator::up(db, None)
        .await
        .map_err(|e| GameHubError::database_operation(format!("migration failed: {}", e)))?;

    info!("Applied {} database migrations", pending.len());
    Ok(())
}
