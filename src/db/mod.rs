use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::administrators;
use crate::models::{ActionEvent, AdminSummary, Administrator};

pub mod migrator;
pub mod repositories;

pub use repositories::admin::hash_password;

/// Shared storage handle. One pooled connection behind every operation,
/// replacing the original's per-call connection string.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn admin_repo(&self) -> repositories::admin::AdminRepository {
        repositories::admin::AdminRepository::new(self.conn.clone())
    }

    fn event_repo(&self) -> repositories::events::EventRepository {
        repositories::events::EventRepository::new(self.conn.clone())
    }

    pub async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<administrators::Model>> {
        self.admin_repo().get_by_username(username).await
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        self.admin_repo().username_exists(username).await
    }

    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        self.admin_repo().verify_credentials(username, password).await
    }

    pub async fn register_admin(&self, username: &str, password: &str) -> Result<i32> {
        self.admin_repo().register(username, password).await
    }

    pub async fn rename_admin(
        &self,
        old_username: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<bool> {
        self.admin_repo()
            .rename(old_username, new_username, new_password)
            .await
    }

    pub async fn delete_admin(&self, username: &str) -> Result<bool> {
        self.admin_repo().delete(username).await
    }

    pub async fn touch_last_login(&self, username: &str) -> Result<()> {
        self.admin_repo().touch_last_login(username).await
    }

    pub async fn append_action(&self, username: &str, label: &str) -> Result<()> {
        self.admin_repo().append_action(username, label).await
    }

    pub async fn list_admins(&self) -> Result<Vec<Administrator>> {
        let rows = self.admin_repo().list_all().await?;
        Ok(rows.into_iter().map(Administrator::from).collect())
    }

    pub async fn list_admin_summaries(&self) -> Result<Vec<AdminSummary>> {
        let rows = self.admin_repo().list_all().await?;
        Ok(rows.into_iter().map(AdminSummary::from).collect())
    }

    pub async fn list_action_logs(&self) -> Result<Vec<(String, String)>> {
        self.admin_repo().list_action_logs().await
    }

    pub async fn recent_events(&self, limit: u64) -> Result<Vec<ActionEvent>> {
        let rows = self.event_repo().recent(limit).await?;
        Ok(rows.into_iter().map(ActionEvent::from).collect())
    }

    pub async fn events_for(&self, username: &str) -> Result<Vec<ActionEvent>> {
        let rows = self.event_repo().for_username(username).await?;
        Ok(rows.into_iter().map(ActionEvent::from).collect())
    }
}
