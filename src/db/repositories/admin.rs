use anyhow::{Context, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use sha2::{Digest, Sha256};

use crate::entities::{action_events, administrators, prelude::*};

pub struct AdminRepository {
    conn: DatabaseConnection,
}

impl AdminRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get the full row for a username, digest included.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<administrators::Model>> {
        let admin = Administrators::find()
            .filter(administrators::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query administrator by username")?;

        Ok(admin)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count = Administrators::find()
            .filter(administrators::Column::Username.eq(username))
            .count(&self.conn)
            .await
            .context("Failed to check username availability")?;

        Ok(count > 0)
    }

    /// Exact match on username and digest, no normalization.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let digest = hash_password(password);

        let count = Administrators::find()
            .filter(administrators::Column::Username.eq(username))
            .filter(administrators::Column::PasswordHash.eq(digest))
            .count(&self.conn)
            .await
            .context("Failed to verify credentials")?;

        Ok(count > 0)
    }

    /// Insert a new administrator and record the registration in both logs.
    /// Runs in one transaction; a unique-index violation on Username
    /// surfaces as a `DbErr` the service maps to a duplicate error.
    pub async fn register(&self, username: &str, password: &str) -> Result<i32> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        let active = administrators::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(hash_password(password)),
            registered_at: Set(now.clone()),
            ..Default::default()
        };

        let result = Administrators::insert(active).exec(&txn).await?;

        append_legacy_log(&txn, username, "account registered").await?;
        insert_event(&txn, username, "account registered", &now).await?;

        txn.commit().await?;
        Ok(result.last_insert_id)
    }

    /// Rename-in-place via the unique key: updates Username and the digest
    /// on the matching row, keeping AdminID and RegistrationDateTime.
    /// Returns false when no row matched `old_username`.
    pub async fn rename(
        &self,
        old_username: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        let Some(admin) = Administrators::find()
            .filter(administrators::Column::Username.eq(old_username))
            .one(&txn)
            .await
            .context("Failed to query administrator for rename")?
        else {
            return Ok(false);
        };

        let mut active: administrators::ActiveModel = admin.into();
        active.username = Set(new_username.to_string());
        active.password_hash = Set(hash_password(new_password));
        active.update(&txn).await?;

        append_legacy_log(&txn, new_username, "identity updated").await?;
        insert_event(&txn, new_username, "identity updated", &now).await?;

        txn.commit().await?;
        Ok(true)
    }

    /// Delete the row matching `username`, recording the deletion in the
    /// row's own legacy log first and durably in the events table.
    /// Returns false when no row matched.
    pub async fn delete(&self, username: &str) -> Result<bool> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        let exists = Administrators::find()
            .filter(administrators::Column::Username.eq(username))
            .count(&txn)
            .await
            .context("Failed to query administrator for deletion")?
            > 0;

        if !exists {
            return Ok(false);
        }

        append_legacy_log(&txn, username, "account deleted").await?;
        insert_event(&txn, username, "account deleted", &now).await?;

        Administrators::delete_many()
            .filter(administrators::Column::Username.eq(username))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(true)
    }

    /// Set LastLoginDateTime for the matching row. Silently succeeds when
    /// no row matches.
    pub async fn touch_last_login(&self, username: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();

        Administrators::update_many()
            .col_expr(administrators::Column::LastLoginAt, Expr::value(now))
            .filter(administrators::Column::Username.eq(username))
            .exec(&self.conn)
            .await
            .context("Failed to update last login time")?;

        Ok(())
    }

    /// Append a label to the legacy column and the events table in one
    /// transaction. The legacy update is a no-op for unknown usernames,
    /// but the structured event is still written.
    pub async fn append_action(&self, username: &str, label: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        append_legacy_log(&txn, username, label).await?;
        insert_event(&txn, username, label, &now).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Every row, digest included. Ordering is primary-key order.
    pub async fn list_all(&self) -> Result<Vec<administrators::Model>> {
        let admins = Administrators::find()
            .all(&self.conn)
            .await
            .context("Failed to list administrators")?;

        Ok(admins)
    }

    /// (username, legacy log text) for rows with a non-null ActionLog.
    pub async fn list_action_logs(&self) -> Result<Vec<(String, String)>> {
        let admins = Administrators::find()
            .filter(administrators::Column::ActionLog.is_not_null())
            .all(&self.conn)
            .await
            .context("Failed to list action logs")?;

        Ok(admins
            .into_iter()
            .filter_map(|a| a.action_log.map(|log| (a.username, log)))
            .collect())
    }
}

/// Grow the legacy ActionLog column, joining entries with "; ".
async fn append_legacy_log<C: ConnectionTrait>(conn: &C, username: &str, label: &str) -> Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DbBackend::Sqlite,
        r#"UPDATE "Administrators" SET "ActionLog" = COALESCE("ActionLog" || '; ', '') || ? WHERE "Username" = ?"#,
        [label.into(), username.into()],
    ))
    .await
    .context("Failed to append to action log")?;

    Ok(())
}

async fn insert_event<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    label: &str,
    created_at: &str,
) -> Result<()> {
    let active = action_events::ActiveModel {
        username: Set(username.to_string()),
        label: Set(label.to_string()),
        created_at: Set(created_at.to_string()),
        ..Default::default()
    };

    ActionEvents::insert(active).exec(conn).await?;
    Ok(())
}

/// Lowercase hex SHA-256 digest, the stored password format.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());

    digest.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
