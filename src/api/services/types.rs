//! API 请求/响应类型

use serde::{Deserialize, Serialize};

/// `{"message": "..."}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 错误响应体 `{"detail": ...}`
///
/// 404/500 时 `detail` 为字符串，422 时为 [`ValidationErrorItem`] 列表。
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorDetail<T> {
    pub detail: T,
}

/// 单条校验错误
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrorItem {
    /// 出错位置，例如 `["body", "title"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// GET /games 查询参数
#[derive(Deserialize, Debug, Default)]
pub struct ListGamesQuery {
    /// 按分类精确过滤，空字符串视为不过滤
    pub category: Option<String>,
}
