//! 配置值验证模块

use crate::errors::{GameHubError, Result};

/// 支持的日志格式
pub const LOG_FORMATS: &[&str] = &["text", "json"];

pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(GameHubError::config("server.port must be between 1 and 65535"));
    }
    Ok(())
}

/// 路由前缀必须以 `/` 开头，且不能以 `/` 结尾（根路径 `/` 除外）
pub fn validate_route_prefix(prefix: &str) -> Result<()> {
    if !prefix.starts_with('/') {
        return Err(GameHubError::config(format!(
            "server.api_prefix must start with '/': '{}'",
            prefix
        )));
    }
    if prefix.len() > 1 && prefix.ends_with('/') {
        return Err(GameHubError::config(format!(
            "server.api_prefix must not end with '/': '{}'",
            prefix
        )));
    }
    Ok(())
}

pub fn validate_log_format(format: &str) -> Result<()> {
    if LOG_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(GameHubError::config(format!(
            "Invalid logging.format: '{}'. Valid: {:?}",
            format, LOG_FORMATS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port() {
        assert!(validate_port(0).is_err());
        assert!(validate_port(1).is_ok());
        assert!(validate_port(8001).is_ok());
    }

    #[test]
    fn test_validate_route_prefix() {
        assert!(validate_route_prefix("/api").is_ok());
        assert!(validate_route_prefix("/").is_ok());
        assert!(validate_route_prefix("/v1/api").is_ok());
        assert!(validate_route_prefix("api").is_err());
        assert!(validate_route_prefix("/api/").is_err());
        assert!(validate_route_prefix("").is_err());
    }

    #[test]
    fn test_validate_log_format() {
        assert!(validate_log_format("text").is_ok());
        assert!(validate_log_format("json").is_ok());
        assert!(validate_log_format("yaml").is_err());
    }
}
