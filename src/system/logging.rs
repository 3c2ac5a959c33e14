//! Logging system initialization
//!
//! Sets up `tracing` according to the `[logging]` section of the static
//! configuration: stdout, an appended file, or a daily rolling file, with
//! text or JSON formatting.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

const DEFAULT_LOG_FILE_NAME: &str = "gamehub.log";

/// 根据配置选择日志输出目标
fn build_writer(config: &LoggingConfig) -> Result<Box<dyn Write + Send + Sync>> {
    let log_file = match config.file.as_deref() {
        Some(f) if !f.is_empty() => f,
        _ => return Ok(Box::new(std::io::stdout())),
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .with_context(|| format!("Failed to create rolling log appender in {:?}", dir))?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file))?;
        Ok(Box::new(file))
    }
}

/// Initialize the global tracing subscriber
///
/// Call once at startup, after the configuration has been loaded. The
/// returned guard must stay alive for the whole process, otherwise buffered
/// lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let writer = build_writer(config)?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);

    // RUST_LOG 优先于配置文件中的 level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level filter '{}'", config.level))?;

    let to_console = config.file.as_ref().is_none_or(|f| f.is_empty());

    let builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    let result = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: false,
            ..Default::default()
        };

        let mut writer = build_writer(&config).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_file_name_means_stdout() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..Default::default()
        };
        assert!(build_writer(&config).is_ok());
    }

    #[test]
    fn test_unopenable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(
                dir.path()
                    .join("missing-dir/nested/x.log")
                    .to_string_lossy()
                    .into_owned(),
            ),
            enable_rotation: false,
            ..Default::default()
        };
        assert!(build_writer(&config).is_err());
    }
}
