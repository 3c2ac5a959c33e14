//! 游戏目录 CRUD 与下载记录

use actix_web::{Responder, Result as ActixResult, web};
use tracing::trace;

use crate::api::constants::{DOWNLOAD_RECORDED_MESSAGE, GAME_DELETED_MESSAGE};
use crate::services::{GameCreate, GameService, GameUpdate};
use crate::storage::GameFilter;

use super::helpers::{api_result, error_from_gamehub, message_response};
use super::types::ListGamesQuery;

/// GET /games
pub async fn list_games(
    query: web::Query<ListGamesQuery>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    trace!("API: list games with filter {:?}", query);

    let filter = GameFilter {
        category: query.into_inner().category.filter(|c| !c.is_empty()),
    };
    Ok(api_result(service.list_games(filter).await))
}

/// GET /games/{id}
pub async fn get_game(
    path: web::Path<String>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(api_result(service.get_game(&id).await))
}

/// POST /games
pub async fn create_game(
    body: web::Json<GameCreate>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    Ok(api_result(service.create_game(body.into_inner()).await))
}

/// PUT /games/{id}
pub async fn update_game(
    path: web::Path<String>,
    body: web::Json<GameUpdate>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(api_result(service.update_game(&id, body.into_inner()).await))
}

/// DELETE /games/{id}
pub async fn delete_game(
    path: web::Path<String>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(match service.delete_game(&id).await {
        Ok(()) => message_response(GAME_DELETED_MESSAGE),
        Err(e) => error_from_gamehub(&e),
    })
}

/// POST /games/{id}/download
pub async fn record_download(
    path: web::Path<String>,
    service: web::Data<GameService>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(match service.record_download(&id).await {
        Ok(()) => message_response(DOWNLOAD_RECORDED_MESSAGE),
        Err(e) => error_from_gamehub(&e),
    })
}
