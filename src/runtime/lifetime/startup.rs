use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{GameService, StatsService, StatusService};
use crate::storage::{SeaOrmStorage, StorageFactory};

/// 服务器启动所需的全部组件
pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub game_service: Arc<GameService>,
    pub stats_service: Arc<StatsService>,
    pub status_service: Arc<StatusService>,
}

impl StartupContext {
    /// 基于已连接的存储构建所有服务
    pub fn from_storage(storage: Arc<SeaOrmStorage>) -> Self {
        Self {
            game_service: Arc::new(GameService::new(storage.clone())),
            stats_service: Arc::new(StatsService::new(storage.clone())),
            status_service: Arc::new(StatusService::new(storage.clone())),
            storage,
        }
    }
}

/// 准备服务器启动的上下文：连接数据库、运行迁移、构建服务
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let context = StartupContext::from_storage(storage);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(context)
}
