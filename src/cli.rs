//! Command-line interface definitions using clap
//!
//! `gamehub` with no subcommand runs the HTTP server.

use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::{GameHubError, Result};

/// `config generate` 未指定路径时的输出文件
pub const DEFAULT_SAMPLE_CONFIG_PATH: &str = "config.example.toml";

/// GameHub - game catalog REST backend
#[derive(Parser, Debug)]
#[command(name = "gamehub")]
#[command(version)]
#[command(about = "Game catalog REST backend", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// 写出示例配置文件，已存在时需要 `--force`
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<String> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_CONFIG_PATH.to_string());

    if !force && Path::new(&path).exists() {
        return Err(GameHubError::file_operation(format!(
            "File already exists: {} (use --force to overwrite)",
            path
        )));
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    StaticConfig::default().save_to_file(&path)?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Environment variables (GAMEHUB__SECTION__KEY) override file values".dimmed()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["gamehub"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_config_flag_and_serve() {
        let cli = Cli::try_parse_from(["gamehub", "-c", "prod.toml", "serve"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_parse_config_generate() {
        let cli = Cli::try_parse_from(["gamehub", "config", "generate", "out.toml", "--force"])
            .unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            }) => {
                assert_eq!(output_path.as_deref(), Some("out.toml"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_generate_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# keep me").unwrap();
        let path_str = path.to_string_lossy().into_owned();

        let err = config_generate(Some(path_str.clone()), false).unwrap_err();
        assert!(matches!(err, GameHubError::FileOperation(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# keep me");

        config_generate(Some(path_str), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("api_prefix"));
    }
}
