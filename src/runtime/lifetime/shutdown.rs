use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::SeaOrmStorage;

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// HTTP 服务停止后的清理工作
///
/// actix 已经处理了 SIGINT/SIGTERM 并等待 worker 退出，这里只负责释放数据库连接。
pub async fn perform_shutdown(storage: &SeaOrmStorage) {
    info!("HTTP server stopped, releasing resources...");

    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), storage.close()).await {
        Ok(Ok(())) => {
            info!("All shutdown tasks completed successfully");
        }
        Ok(Err(e)) => {
            warn!("Failed to close database cleanly: {}", e);
        }
        Err(_) => {
            error!(
                "Shutdown tasks timed out after {} seconds",
                SHUTDOWN_TIMEOUT_SECS
            );
        }
    }
}
