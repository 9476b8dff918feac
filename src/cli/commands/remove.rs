//! Delete admin command handler

use crate::config::Config;
use crate::services::CredentialService;

use super::open_service;

pub async fn cmd_delete_admin(config: &Config, username: &str, yes: bool) -> anyhow::Result<()> {
    if !yes {
        print!("Delete administrator '{username}'? This cannot be undone. [y/N] ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let service = open_service(config).await?;
    service.delete(username).await?;

    println!("✓ Deleted administrator '{username}'");
    Ok(())
}
