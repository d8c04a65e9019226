//! Chat repository — messages, history, contacts, last-read markers.

use async_trait::async_trait;
use sqlx::PgPool;

use tautan_core::error::{AppError, ErrorKind};
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_entity::chat::{ChatMessage, ContactSummary};
use tautan_entity::gateway::ChatStore;

/// Repository for chat message persistence and thread queries.
#[derive(Debug, Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    /// Create a new chat repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for ChatRepository {
    async fn persist_message(
        &self,
        from: UserId,
        to: UserId,
        body: &str,
    ) -> AppResult<ChatMessage> {
        sqlx::query_as::<_, ChatMessage>(
            "INSERT INTO chat (from_id, to_id, message) VALUES ($1, $2, $3) \
             RETURNING id, from_id, to_id, message, timestamp",
        )
        .bind(from)
        .bind(to)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to persist message", e))
    }

    async fn fetch_history(&self, a: UserId, b: UserId) -> AppResult<Vec<ChatMessage>> {
        sqlx::query_as::<_, ChatMessage>(
            "SELECT id, from_id, to_id, message, timestamp FROM chat \
             WHERE (from_id = $1 AND to_id = $2) OR (from_id = $2 AND to_id = $1) \
             ORDER BY timestamp ASC",
        )
        .bind(a)
        .bind(b)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch history", e))
    }

    async fn fetch_contacts(&self, user: UserId) -> AppResult<Vec<ContactSummary>> {
        sqlx::query_as::<_, ContactSummary>(
            "SELECT DISTINCT u.id, u.full_name, \
                    (SELECT message FROM chat \
                      WHERE (chat.from_id = u.id AND chat.to_id = $1) \
                         OR (chat.from_id = $1 AND chat.to_id = u.id) \
                      ORDER BY timestamp DESC LIMIT 1) AS last_message, \
                    (SELECT COUNT(*) FROM chat \
                      WHERE chat.to_id = $1 AND chat.from_id = u.id \
                        AND chat.timestamp > COALESCE( \
                            (SELECT last_read_at FROM chat_reads \
                              WHERE user_id = $1 AND peer_id = u.id), \
                            TIMESTAMPTZ 'epoch')) AS unread_count \
             FROM connection c \
             JOIN users u ON (c.from_id = u.id OR c.to_id = u.id) \
             WHERE (c.from_id = $1 OR c.to_id = $1) AND u.id <> $1",
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch contacts", e))
    }

    async fn mark_thread_read(&self, user: UserId, peer: UserId) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO chat_reads (user_id, peer_id, last_read_at) VALUES ($1, $2, NOW()) \
             ON CONFLICT (user_id, peer_id) DO UPDATE SET last_read_at = NOW()",
        )
        .bind(user)
        .bind(peer)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update last-read marker", e)
        })?;
        Ok(())
    }
}
