//! Register command handler

use crate::config::Config;
use crate::services::CredentialService;

use super::{open_service, read_password};

pub async fn cmd_register(
    config: &Config,
    username: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let password = read_password(password)?;
    let service = open_service(config).await?;

    let id = service.register(username, &password).await?;

    println!("✓ Registered administrator '{username}' (id {id})");
    Ok(())
}
