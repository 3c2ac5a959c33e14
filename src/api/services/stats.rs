use actix_web::{Responder, Result as ActixResult, web};

use crate::services::StatsService;

use super::helpers::api_result;

/// GET /stats
pub async fn get_stats(service: web::Data<StatsService>) -> ActixResult<impl Responder> {
    Ok(api_result(service.get_stats().await))
}
