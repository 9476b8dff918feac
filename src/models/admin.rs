use serde::{Deserialize, Serialize};

use crate::entities::{action_events, administrators};

/// Full administrator row, digest included. Only reachable through the
/// gated listing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administrator {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub registered_at: String,
    pub last_login_at: Option<String>,
    pub action_log: Option<String>,
}

impl From<administrators::Model> for Administrator {
    fn from(model: administrators::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            registered_at: model.registered_at,
            last_login_at: model.last_login_at,
            action_log: model.action_log,
        }
    }
}

/// Listing row with the digest stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSummary {
    pub id: i32,
    pub username: String,
    pub registered_at: String,
    pub last_login_at: Option<String>,
}

impl From<administrators::Model> for AdminSummary {
    fn from(model: administrators::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            registered_at: model.registered_at,
            last_login_at: model.last_login_at,
        }
    }
}

/// One structured audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEvent {
    pub id: i64,
    pub username: String,
    pub label: String,
    pub created_at: String,
}

impl From<action_events::Model> for ActionEvent {
    fn from(model: action_events::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            label: model.label,
            created_at: model.created_at,
        }
    }
}
