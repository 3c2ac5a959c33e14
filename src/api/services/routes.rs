//! API 路由配置
//!
//! 所有路由都挂在可配置的前缀下（默认 `/api`）。

use actix_web::web;

use crate::api::constants::JSON_BODY_LIMIT;

use super::games::{create_game, delete_game, get_game, list_games, record_download, update_game};
use super::helpers::json_error_handler;
use super::stats::get_stats;
use super::status::{create_status_check, list_status_checks, root};

/// 游戏路由 `/games`
///
/// 包含：
/// - GET /games - 获取游戏列表（可选 `?category=`）
/// - POST /games - 创建游戏
/// - GET /games/{id} - 获取单个游戏
/// - PUT /games/{id} - 部分更新
/// - DELETE /games/{id} - 删除游戏及其点击记录
/// - POST /games/{id}/download - 记录一次下载
pub fn games_routes() -> actix_web::Scope {
    web::scope("/games")
        .route("", web::get().to(list_games))
        .route("", web::post().to(create_game))
        .route("/{id}/download", web::post().to(record_download))
        .route("/{id}", web::get().to(get_game))
        .route("/{id}", web::put().to(update_game))
        .route("/{id}", web::delete().to(delete_game))
}

/// 状态检查路由 `/status`
pub fn status_routes() -> actix_web::Scope {
    web::scope("/status")
        .route("", web::get().to(list_status_checks))
        .route("", web::post().to(create_status_check))
}

/// JSON 请求体配置：大小限制 + 422 错误格式
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

/// 构建完整的 API scope
///
/// `prefix` 为 `/` 时路由直接挂在根路径下。
pub fn api_scope(prefix: &str) -> actix_web::Scope {
    let prefix = if prefix == "/" { "" } else { prefix };

    web::scope(prefix)
        .app_data(json_config())
        .route("", web::get().to(root))
        .route("/", web::get().to(root))
        .route("/stats", web::get().to(get_stats))
        .service(games_routes())
        .service(status_routes())
}
