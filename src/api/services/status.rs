//! 状态检查与根路由

use actix_web::{Responder, Result as ActixResult, web};

use crate::api::constants::ROOT_MESSAGE;
use crate::services::{StatusCheckCreate, StatusService};

use super::helpers::{api_result, message_response};

/// GET /
pub async fn root() -> ActixResult<impl Responder> {
    Ok(message_response(ROOT_MESSAGE))
}

/// POST /status
pub async fn create_status_check(
    body: web::Json<StatusCheckCreate>,
    service: web::Data<StatusService>,
) -> ActixResult<impl Responder> {
    Ok(api_result(service.create_status_check(body.into_inner()).await))
}

/// GET /status
pub async fn list_status_checks(service: web::Data<StatusService>) -> ActixResult<impl Responder> {
    Ok(api_result(service.list_status_checks().await))
}
