//! Chat message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tautan_core::types::{MessageId, UserId};

/// A persisted direct message between two users.
///
/// Immutable once created. The timestamp is assigned by the database at
/// insertion time; persistence is the durability boundary, so a row exists
/// before any delivery attempt is made.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: MessageId,
    /// Sender identity.
    pub from_id: UserId,
    /// Recipient identity.
    pub to_id: UserId,
    /// Message body.
    pub message: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}
