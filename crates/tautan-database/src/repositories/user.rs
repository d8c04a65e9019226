//! User repository — read-only lookups for the chat subsystem.

use sqlx::PgPool;

use tautan_core::error::{AppError, ErrorKind};
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_entity::user::User;

/// Repository for user lookups. Account mutation lives elsewhere.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, full_name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch user", e))
    }

    /// Look up only the display name, used for push payloads.
    pub async fn find_full_name(&self, id: UserId) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT full_name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch user name", e)
            })
    }
}
