//! Web Push subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tautan_core::types::UserId;

/// A browser push subscription stored for offline delivery.
///
/// Keyed by endpoint: re-subscribing from another account moves the
/// endpoint to the new user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushSubscription {
    /// Push service endpoint URL (primary key).
    pub endpoint: String,
    /// Owning user.
    pub user_id: UserId,
    /// Client encryption keys, stored as JSON.
    #[sqlx(json)]
    pub keys: SubscriptionKeys,
    /// When the subscription was first saved.
    pub created_at: DateTime<Utc>,
}

/// Encryption keys supplied by the browser's Push API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// Client public key.
    pub p256dh: String,
    /// Shared authentication secret.
    pub auth: String,
}
