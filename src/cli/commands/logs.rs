//! Action log command handlers

use crate::config::Config;
use crate::services::CredentialService;

use super::{open_service, open_store};

/// Legacy "; "-joined logs, one line per account, like the original
/// log-view screen.
pub async fn cmd_logs(config: &Config, username: Option<&str>) -> anyhow::Result<()> {
    if let Some(user) = username {
        let store = open_store(config).await?;

        match store.get_admin_by_username(user).await? {
            Some(admin) => match admin.action_log {
                Some(log) => println!("{user}: {log}"),
                None => println!("No action logs recorded."),
            },
            None => println!("No administrator named {user}"),
        }

        return Ok(());
    }

    let service = open_service(config).await?;
    let logs = service.list_action_logs().await?;

    if logs.is_empty() {
        println!("No action logs recorded.");
        return Ok(());
    }

    for (user, log) in logs {
        println!("{user}: {log}");
    }

    Ok(())
}

pub async fn cmd_events(
    config: &Config,
    username: Option<&str>,
    limit: u64,
) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    let events = match username {
        Some(user) => service.events_for(user).await?,
        None => service.recent_events(limit).await?,
    };

    if events.is_empty() {
        println!("No audit events recorded.");
        return Ok(());
    }

    for event in events {
        println!("{} [{}] {}", event.created_at, event.username, event.label);
    }

    Ok(())
}
