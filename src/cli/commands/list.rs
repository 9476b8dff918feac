//! List admins command handler

use crate::config::Config;
use crate::services::CredentialService;

use super::open_service;

pub async fn cmd_list_admins(config: &Config, with_hashes: bool) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    if with_hashes {
        let admins = service.list_accounts_with_hashes().await?;

        if admins.is_empty() {
            println!("No administrators registered.");
            return Ok(());
        }

        println!("Administrators ({} total)", admins.len());
        println!("{:-<70}", "");
        for admin in admins {
            println!("{} {}", admin.id, admin.username);
            println!("  digest: {}", admin.password_hash);
            println!("  registered: {}", admin.registered_at);
        }
        return Ok(());
    }

    let admins = service.list_accounts().await?;

    if admins.is_empty() {
        println!("No administrators registered.");
        println!();
        println!("Add one with: adminarr register <username>");
        return Ok(());
    }

    println!("Administrators ({} total)", admins.len());
    println!("{:-<70}", "");

    for admin in admins {
        let last_login = admin.last_login_at.as_deref().unwrap_or("never");
        println!("{} {}", admin.id, admin.username);
        println!(
            "  registered: {} | last login: {}",
            admin.registered_at, last_login
        );
    }

    Ok(())
}
