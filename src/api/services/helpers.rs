//! API 帮助函数
//!
//! 统一 GameHubError → HttpResponse 的映射以及请求体解析失败时的 422 响应。

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, trace};

use crate::api::constants::INTERNAL_ERROR_DETAIL;
use crate::errors::GameHubError;

use super::types::{ErrorDetail, MessageResponse, ValidationErrorItem};

/// 构建 200 JSON 响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(data)
}

pub fn message_response(message: &str) -> HttpResponse {
    success_response(MessageResponse::new(message))
}

/// 构建 `{"detail": "..."}` 错误响应
pub fn detail_response(status: StatusCode, detail: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorDetail { detail })
}

/// 构建 422 响应
pub fn validation_response(items: Vec<ValidationErrorItem>) -> HttpResponse {
    HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(ErrorDetail { detail: items })
}

/// 单条 body 校验错误，`field` 为空时只定位到 body
pub fn body_error(field: Option<&str>, msg: impl Into<String>, kind: &str) -> ValidationErrorItem {
    let mut loc = vec!["body".to_string()];
    if let Some(field) = field {
        loc.push(field.to_string());
    }
    ValidationErrorItem {
        loc,
        msg: msg.into(),
        kind: kind.to_string(),
    }
}

/// 从 GameHubError 构建错误响应
///
/// 只有 NotFound/Validation 的信息会返回给客户端，其余错误记录日志后返回 500。
pub fn error_from_gamehub(err: &GameHubError) -> HttpResponse {
    match err {
        GameHubError::NotFound(msg) => detail_response(StatusCode::NOT_FOUND, msg),
        GameHubError::Validation(msg) => {
            // 服务层约定格式 "field: message"
            let item = match msg.split_once(": ") {
                Some((field, rest)) => body_error(Some(field), rest, "value_error"),
                None => body_error(None, msg.as_str(), "value_error"),
            };
            validation_response(vec![item])
        }
        _ => {
            error!(code = err.code(), "{}", err.format_simple());
            detail_response(err.http_status(), INTERNAL_ERROR_DETAIL)
        }
    }
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: crate::errors::Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_gamehub(&e),
    }
}

/// 从 serde 错误信息中提取缺失的字段名，例如 "missing field `title` at line 1"
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// 把 JSON 请求体错误转换为校验错误列表
pub fn json_error_items(err: &JsonPayloadError) -> Vec<ValidationErrorItem> {
    match err {
        JsonPayloadError::Deserialize(e) => {
            let message = e.to_string();
            if e.is_data() {
                match missing_field_name(&message) {
                    Some(field) => vec![body_error(Some(field), "Field required", "missing")],
                    None => vec![body_error(None, message.as_str(), "type_error")],
                }
            } else {
                vec![body_error(None, message.as_str(), "json_invalid")]
            }
        }
        JsonPayloadError::ContentType => vec![body_error(
            None,
            "Expected Content-Type: application/json",
            "content_type",
        )],
        other => vec![body_error(None, other.to_string(), "body_error")],
    }
}

/// `web::JsonConfig` 的错误处理器
///
/// 请求体过大返回 413，其余解析失败统一返回 422。
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    trace!("Rejected JSON body for {}: {}", req.path(), err);

    let response = match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            detail_response(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
        }
        ref other => validation_response(json_error_items(other)),
    };

    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_not_found_detail() {
        let resp = error_from_gamehub(&GameHubError::game_not_found());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["detail"], "Game not found");
    }

    #[actix_rt::test]
    async fn test_validation_detail_has_field_location() {
        let resp = error_from_gamehub(&GameHubError::validation("title: field may not be null"));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(resp).await;
        assert_eq!(json["detail"][0]["loc"], serde_json::json!(["body", "title"]));
        assert_eq!(json["detail"][0]["msg"], "field may not be null");
        assert_eq!(json["detail"][0]["type"], "value_error");
    }

    #[actix_rt::test]
    async fn test_internal_errors_are_masked() {
        let resp = error_from_gamehub(&GameHubError::database_operation("disk I/O error"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert_eq!(json["detail"], INTERNAL_ERROR_DETAIL);
    }

    #[test]
    fn test_missing_field_name() {
        assert_eq!(
            missing_field_name("missing field `title` at line 1 column 2"),
            Some("title")
        );
        assert_eq!(missing_field_name("invalid type: integer `1`"), None);
    }

    #[test]
    fn test_json_error_items_for_missing_field() {
        let err = serde_json::from_str::<crate::services::GameCreate>(r#"{"description": "d"}"#)
            .unwrap_err();
        let items = json_error_items(&JsonPayloadError::Deserialize(err));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "missing");
        assert_eq!(items[0].loc, vec!["body".to_string(), "title".to_string()]);
    }

    #[test]
    fn test_json_error_items_for_syntax_error() {
        let err = serde_json::from_str::<crate::services::GameCreate>("{not json").unwrap_err();
        let items = json_error_items(&JsonPayloadError::Deserialize(err));
        assert_eq!(items[0].kind, "json_invalid");
    }
}
