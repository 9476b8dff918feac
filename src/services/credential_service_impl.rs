//! `SeaORM` implementation of the `CredentialService` trait.

use async_trait::async_trait;
use sea_orm::SqlErr;

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::models::{ActionEvent, AdminSummary, Administrator};
use crate::services::credential_service::{AdminId, CredentialError, CredentialService};

pub struct SeaOrmCredentialService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmCredentialService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    fn check_credentials_present(username: &str, password: &str) -> Result<(), CredentialError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(CredentialError::EmptyCredentials);
        }
        Ok(())
    }
}

/// The unique index on Username turns a registration race into a
/// constraint violation; map it to the duplicate error instead of a
/// generic storage failure.
fn map_unique_violation(err: anyhow::Error, username: &str) -> CredentialError {
    let is_unique = err
        .downcast_ref::<sea_orm::DbErr>()
        .and_then(sea_orm::DbErr::sql_err)
        .is_some_and(|e| matches!(e, SqlErr::UniqueConstraintViolation(_)));

    if is_unique {
        CredentialError::DuplicateUsername(username.to_string())
    } else {
        CredentialError::Storage(err.to_string())
    }
}

#[async_trait]
impl CredentialService for SeaOrmCredentialService {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, CredentialError> {
        Self::check_credentials_present(username, password)?;

        let is_valid = self.store.verify_credentials(username, password).await?;
        Ok(is_valid)
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        let is_valid = self.authenticate(username, password).await?;

        if !is_valid {
            return Err(CredentialError::AuthenticationFailed);
        }

        self.record_login(username).await?;
        self.append_log(username, "logged in").await?;

        Ok(())
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminId, CredentialError> {
        Self::check_credentials_present(username, password)?;

        // Pre-check for a friendly error; the unique index closes the race.
        if self.store.username_exists(username).await? {
            return Err(CredentialError::DuplicateUsername(username.to_string()));
        }

        let id = self
            .store
            .register_admin(username, password)
            .await
            .map_err(|e| map_unique_violation(e, username))?;

        Ok(id)
    }

    async fn update_identity(
        &self,
        old_username: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<(), CredentialError> {
        Self::check_credentials_present(new_username, new_password)?;

        if old_username.trim().is_empty() {
            return Err(CredentialError::EmptyCredentials);
        }

        let renamed = self
            .store
            .rename_admin(old_username, new_username, new_password)
            .await
            .map_err(|e| map_unique_violation(e, new_username))?;

        if !renamed {
            return Err(CredentialError::UnknownUsername(old_username.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<(), CredentialError> {
        let deleted = self.store.delete_admin(username).await?;

        if !deleted {
            return Err(CredentialError::UnknownUsername(username.to_string()));
        }

        Ok(())
    }

    async fn record_login(&self, username: &str) -> Result<(), CredentialError> {
        self.store.touch_last_login(username).await?;
        Ok(())
    }

    async fn append_log(&self, username: &str, label: &str) -> Result<(), CredentialError> {
        self.store.append_action(username, label).await?;
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<AdminSummary>, CredentialError> {
        let accounts = self.store.list_admin_summaries().await?;
        Ok(accounts)
    }

    async fn list_accounts_with_hashes(&self) -> Result<Vec<Administrator>, CredentialError> {
        if !self.security.allow_hash_listing {
            return Err(CredentialError::HashListingDisabled);
        }

        let accounts = self.store.list_admins().await?;
        Ok(accounts)
    }

    async fn list_action_logs(&self) -> Result<Vec<(String, String)>, CredentialError> {
        let logs = self.store.list_action_logs().await?;
        Ok(logs)
    }

    async fn recent_events(&self, limit: u64) -> Result<Vec<ActionEvent>, CredentialError> {
        let events = self.store.recent_events(limit).await?;
        Ok(events)
    }

    async fn events_for(&self, username: &str) -> Result<Vec<ActionEvent>, CredentialError> {
        let events = self.store.events_for(username).await?;
        Ok(events)
    }
}
