use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum GameHubError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl GameHubError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GameHubError::Config(_) => "E001",
            GameHubError::DatabaseConfig(_) => "E002",
            GameHubError::DatabaseConnection(_) => "E003",
            GameHubError::DatabaseOperation(_) => "E004",
            GameHubError::FileOperation(_) => "E005",
            GameHubError::Validation(_) => "E006",
            GameHubError::NotFound(_) => "E007",
            GameHubError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GameHubError::Config(_) => "Configuration Error",
            GameHubError::DatabaseConfig(_) => "Database Configuration Error",
            GameHubError::DatabaseConnection(_) => "Database Connection Error",
            GameHubError::DatabaseOperation(_) => "Database Operation Error",
            GameHubError::FileOperation(_) => "File Operation Error",
            GameHubError::Validation(_) => "Validation Error",
            GameHubError::NotFound(_) => "Resource Not Found",
            GameHubError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GameHubError::Config(msg)
            | GameHubError::DatabaseConfig(msg)
            | GameHubError::DatabaseConnection(msg)
            | GameHubError::DatabaseOperation(msg)
            | GameHubError::FileOperation(msg)
            | GameHubError::Validation(msg)
            | GameHubError::NotFound(msg)
            | GameHubError::Serialization(msg) => msg,
        }
    }

    /// 映射到 HTTP 状态码
    ///
    /// 只有 NotFound 和 Validation 是客户端错误，其余都按 500 处理。
    pub fn http_status(&self) -> StatusCode {
        match self {
            GameHubError::NotFound(_) => StatusCode::NOT_FOUND,
            GameHubError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败时的终端提示）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GameHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GameHubError {}

// 便捷的构造函数
impl GameHubError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        GameHubError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        GameHubError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        GameHubError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        GameHubError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        GameHubError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GameHubError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GameHubError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GameHubError::Serialization(msg.into())
    }

    /// 游戏不存在（对外暴露的固定提示）
    pub fn game_not_found() -> Self {
        GameHubError::NotFound("Game not found".to_string())
    }
}

impl From<sea_orm::DbErr> for GameHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        GameHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GameHubError {
    fn from(err: std::io::Error) -> Self {
        GameHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GameHubError {
    fn from(err: serde_json::Error) -> Self {
        GameHubError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GameHubError {
    fn from(err: config::ConfigError) -> Self {
        GameHubError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            GameHubError::game_not_found().http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GameHubError::validation("title: field cannot be null").http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            GameHubError::database_operation("disk I/O error").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GameHubError::database_connection("refused").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_err_conversion() {
        let err: GameHubError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, GameHubError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }
}
