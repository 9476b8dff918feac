pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
pub use config::Config;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Register { username, password }) => {
            cli::cmd_register(&config, &username, password.as_deref()).await
        }

        Some(Commands::Login { username, password }) => {
            cli::cmd_login(&config, &username, password.as_deref()).await
        }

        Some(Commands::Logout { username }) => cli::cmd_logout(&config, &username).await,

        Some(Commands::Update {
            old_username,
            new_username,
            password,
        }) => {
            cli::cmd_update_identity(&config, &old_username, &new_username, password.as_deref())
                .await
        }

        Some(Commands::Delete { username, yes }) => {
            cli::cmd_delete_admin(&config, &username, yes).await
        }

        Some(Commands::List { with_hashes }) => cli::cmd_list_admins(&config, with_hashes).await,

        Some(Commands::Logs { username }) => cli::cmd_logs(&config, username.as_deref()).await,

        Some(Commands::Events { username, limit }) => {
            cli::cmd_events(&config, username.as_deref(), limit).await
        }

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("Config file already exists.");
            }
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
