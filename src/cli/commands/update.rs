//! Update identity command handler

use crate::config::Config;
use crate::services::CredentialService;

use super::{open_service, read_password};

pub async fn cmd_update_identity(
    config: &Config,
    old_username: &str,
    new_username: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let password = read_password(password)?;
    let service = open_service(config).await?;

    service
        .update_identity(old_username, new_username, &password)
        .await?;

    println!("✓ Updated '{old_username}' -> '{new_username}'");
    Ok(())
}
