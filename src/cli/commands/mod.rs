mod list;
mod login;
mod logs;
mod register;
mod remove;
mod update;

pub use list::cmd_list_admins;
pub use login::{cmd_login, cmd_logout};
pub use logs::{cmd_events, cmd_logs};
pub use register::cmd_register;
pub use remove::cmd_delete_admin;
pub use update::cmd_update_identity;

use std::io::Write;

use crate::config::Config;
use crate::db::Store;
use crate::services::SeaOrmCredentialService;

pub(crate) async fn open_store(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

/// Open the store and wrap it in the credential service.
pub(crate) async fn open_service(config: &Config) -> anyhow::Result<SeaOrmCredentialService> {
    let store = open_store(config).await?;

    Ok(SeaOrmCredentialService::new(
        store,
        config.security.clone(),
    ))
}

/// Use the flag value when given, otherwise prompt on stdin.
pub(crate) fn read_password(provided: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = provided {
        return Ok(password.to_string());
    }

    print!("Password: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
