//! API 模块常量定义

/// 请求 ID 响应头（小写，供 `HeaderName::from_static` 使用）
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 接受客户端传入请求 ID 的最大长度
pub const MAX_REQUEST_ID_LEN: usize = 64;

/// JSON 请求体大小上限（1 MiB）
pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

pub const ROOT_MESSAGE: &str = "GameHub API is running";
pub const GAME_DELETED_MESSAGE: &str = "Game deleted successfully";
pub const DOWNLOAD_RECORDED_MESSAGE: &str = "Download count incremented";

/// 500 响应的固定提示，具体原因只写日志
pub const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";
