//! Domain service for administrator credential management.
//!
//! Handles authentication, registration, identity updates, deletion, and
//! the per-account action log.

use thiserror::Error;

use crate::models::{ActionEvent, AdminSummary, Administrator};

/// Storage-assigned administrator id.
pub type AdminId = i32;

/// Errors specific to credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Username and password must not be empty")]
    EmptyCredentials,

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("No administrator named {0}")]
    UnknownUsername(String),

    #[error("Invalid username or password")]
    AuthenticationFailed,

    #[error("Hash listing is disabled; enable security.allow_hash_listing to use it")]
    HashListingDisabled,

    #[error("Database error: {0}")]
    Storage(String),

    /// Defensive; unreachable with the SHA-256 digest in use.
    #[error("Hashing failed: {0}")]
    Hashing(String),
}

impl From<sea_orm::DbErr> for CredentialError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for CredentialError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Domain service trait for the credential store.
#[async_trait::async_trait]
pub trait CredentialService: Send + Sync {
    /// Checks whether a row matches both the username and the password
    /// digest, exact match. Does not record the login; callers orchestrate
    /// [`CredentialService::record_login`] and [`CredentialService::append_log`].
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<bool, CredentialError>;

    /// Authenticates and, on success, records the login time and appends a
    /// "logged in" entry.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::AuthenticationFailed`] when no row matches.
    async fn login(&self, username: &str, password: &str) -> Result<(), CredentialError>;

    /// Creates a new account with a fresh registration timestamp and a
    /// hashed password, and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::DuplicateUsername`] when the name exists,
    /// whether caught by the pre-check or by the unique index on insert.
    async fn register(&self, username: &str, password: &str)
    -> Result<AdminId, CredentialError>;

    /// Renames an account in place via the unique key and replaces its
    /// password digest. Id and registration time are preserved.
    async fn update_identity(
        &self,
        old_username: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<(), CredentialError>;

    /// Removes the account, recording the deletion in its own legacy log
    /// before the row goes and durably in the events table.
    async fn delete(&self, username: &str) -> Result<(), CredentialError>;

    /// Sets the last-login time. Silently succeeds for unknown usernames.
    async fn record_login(&self, username: &str) -> Result<(), CredentialError>;

    /// Appends an action label to the account's log.
    async fn append_log(&self, username: &str, label: &str) -> Result<(), CredentialError>;

    /// Every account, digests stripped.
    async fn list_accounts(&self) -> Result<Vec<AdminSummary>, CredentialError>;

    /// Every account including stored digests.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::HashListingDisabled`] unless explicitly
    /// enabled in the security config.
    async fn list_accounts_with_hashes(&self) -> Result<Vec<Administrator>, CredentialError>;

    /// (username, legacy log text) for accounts with a non-empty log.
    async fn list_action_logs(&self) -> Result<Vec<(String, String)>, CredentialError>;

    /// Most recent structured audit events, newest first.
    async fn recent_events(&self, limit: u64) -> Result<Vec<ActionEvent>, CredentialError>;

    /// Structured audit events for one account in insertion order.
    async fn events_for(&self, username: &str) -> Result<Vec<ActionEvent>, CredentialError>;
}
