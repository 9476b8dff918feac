use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::entities::{action_events, prelude::*};

pub struct EventRepository {
    conn: DatabaseConnection,
}

impl EventRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Newest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<action_events::Model>> {
        let events = ActionEvents::find()
            .order_by_desc(action_events::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("Failed to query recent events")?;

        Ok(events)
    }

    /// All events for one account in insertion order.
    pub async fn for_username(&self, username: &str) -> Result<Vec<action_events::Model>> {
        let events = ActionEvents::find()
            .filter(action_events::Column::Username.eq(username))
            .order_by_asc(action_events::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query events for username")?;

        Ok(events)
    }
}
