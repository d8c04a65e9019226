//! Push subscription repository.

use sqlx::PgPool;

use tautan_core::error::{AppError, ErrorKind};
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_entity::push::{PushSubscription, SubscriptionKeys};

/// Repository for browser push subscriptions.
#[derive(Debug, Clone)]
pub struct PushSubscriptionRepository {
    pool: PgPool,
}

impl PushSubscriptionRepository {
    /// Create a new push subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or update a subscription, keyed by endpoint.
    ///
    /// Re-subscribing from another account moves the endpoint to that user.
    pub async fn upsert(
        &self,
        endpoint: &str,
        user_id: UserId,
        keys: &SubscriptionKeys,
    ) -> AppResult<()> {
        let keys_json = serde_json::to_value(keys)?;

        sqlx::query(
            "INSERT INTO push_subscriptions (endpoint, user_id, keys, created_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (endpoint) DO UPDATE SET user_id = $2, keys = $3",
        )
        .bind(endpoint)
        .bind(user_id)
        .bind(keys_json)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to save push subscription", e)
        })?;
        Ok(())
    }

    /// Fetch the most recent subscription for a user, if any.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<PushSubscription>> {
        sqlx::query_as::<_, PushSubscription>(
            "SELECT endpoint, user_id, keys, created_at FROM push_subscriptions \
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch push subscription", e)
        })
    }

    /// Delete a subscription by endpoint (client unsubscribed).
    pub async fn delete(&self, endpoint: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
            .bind(endpoint)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete push subscription", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
