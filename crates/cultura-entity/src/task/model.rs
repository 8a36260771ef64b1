//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A personal to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Owning member.
    pub user_id: Uuid,
    /// Whether the task has been ticked off.
    pub is_completed: bool,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// A new, incomplete task.
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            user_id,
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    /// Whether the task still counts as pending.
    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}
