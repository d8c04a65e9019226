//! User entity model.
//!
//! Account lifecycle (registration, profile edits) is owned by the main
//! application; this subsystem only reads identity and display data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tautan_core::types::UserId;

/// A registered user, as read by the chat subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name shown in contact lists and notifications.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}
