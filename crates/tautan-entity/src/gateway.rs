//! Collaborator gateway traits.
//!
//! The real-time engine talks to the persistence layer and the push
//! fallback exclusively through these traits, so the chat semantics can be
//! exercised in tests without a database or a push service.

use async_trait::async_trait;

use tautan_core::result::AppResult;
use tautan_core::types::UserId;

use crate::chat::{ChatMessage, ContactSummary};

/// Persistence gateway for chat state.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Persist a new message with a server-assigned timestamp and return
    /// the full stored record.
    async fn persist_message(
        &self,
        from: UserId,
        to: UserId,
        body: &str,
    ) -> AppResult<ChatMessage>;

    /// Fetch the full thread between two users, ordered by creation time
    /// ascending. Symmetric: `(a, b)` and `(b, a)` return the same rows.
    async fn fetch_history(&self, a: UserId, b: UserId) -> AppResult<Vec<ChatMessage>>;

    /// Fetch the user's contacts with last message and unread count.
    async fn fetch_contacts(&self, user: UserId) -> AppResult<Vec<ContactSummary>>;

    /// Advance the user's last-read marker for a peer to now.
    async fn mark_thread_read(&self, user: UserId, peer: UserId) -> AppResult<()>;
}

/// Best-effort push delivery for offline recipients.
///
/// Fire-and-forget from the router's perspective: failures are logged by
/// the caller, never retried and never surfaced to the sender.
#[async_trait]
pub trait PushDispatch: Send + Sync {
    /// Deliver a chat notification to an offline recipient.
    async fn push_notify(&self, recipient: UserId, sender: UserId, body: &str) -> AppResult<()>;
}
