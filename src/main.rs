use clap::Parser;

use gamehub::cli::{Cli, Commands, ConfigCommands, config_generate};
use gamehub::config::init_config;
use gamehub::errors::GameHubError;
use gamehub::runtime::modes::run_server;
use gamehub::system::init_logging;

fn exit_with(err: &GameHubError) -> ! {
    eprintln!("{}", err.format_colored());
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env 只是补充环境变量，不存在时忽略
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        }) => {
            if let Err(e) = config_generate(output_path, force) {
                exit_with(&e);
            }
            Ok(())
        }
        Some(Commands::Serve) | None => {
            let config = match init_config(cli.config.as_deref()) {
                Ok(config) => config,
                Err(e) => exit_with(&e),
            };

            let _guard = init_logging(&config.logging)?;

            run_server(&config).await
        }
    }
}
