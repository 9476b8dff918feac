//! Login and logout command handlers

use crate::config::Config;
use crate::services::{CredentialError, CredentialService};

use super::{open_service, read_password};

pub async fn cmd_login(
    config: &Config,
    username: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let password = read_password(password)?;
    let service = open_service(config).await?;

    match service.login(username, &password).await {
        Ok(()) => {
            println!("✓ Logged in as '{username}'");
            Ok(())
        }
        Err(CredentialError::AuthenticationFailed) => {
            println!("Invalid username or password");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn cmd_logout(config: &Config, username: &str) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    service.append_log(username, "logged out").await?;

    println!("✓ Logged out '{username}'");
    Ok(())
}
