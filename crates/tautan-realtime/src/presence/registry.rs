//! Presence registry — maps each user identity to its live connection.

use std::sync::Arc;

use dashmap::DashMap;

use tautan_core::types::{ConnectionId, UserId};

use crate::connection::ConnectionHandle;

/// In-memory map from user identity to exactly one live connection handle.
///
/// Last-writer-wins: registering a second connection for the same identity
/// replaces the entry and returns the displaced handle, which the registry
/// never closes itself. All operations are single atomic map operations;
/// none of them suspends.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    entries: DashMap<UserId, Arc<ConnectionHandle>>,
}

impl PresenceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Register a connection for a user, replacing any existing entry.
    ///
    /// Returns the displaced handle if one was present so the caller can
    /// decide what to do with it.
    pub fn register(
        &self,
        user_id: UserId,
        handle: Arc<ConnectionHandle>,
    ) -> Option<Arc<ConnectionHandle>> {
        self.entries.insert(user_id, handle)
    }

    /// Look up the live connection for a user, if any.
    pub fn lookup(&self, user_id: UserId) -> Option<Arc<ConnectionHandle>> {
        self.entries.get(&user_id).map(|e| e.value().clone())
    }

    /// Remove the entry for a user, but only if it still belongs to the
    /// given connection.
    ///
    /// Guards against a stale close event removing the entry a newer
    /// connection for the same identity has already installed. Returns
    /// whether an entry was removed.
    pub fn deregister(&self, user_id: UserId, conn_id: ConnectionId) -> bool {
        self.entries
            .remove_if(&user_id, |_, handle| handle.id == conn_id)
            .is_some()
    }

    /// Check whether a user has a live connection.
    pub fn is_online(&self, user_id: UserId) -> bool {
        self.entries.contains_key(&user_id)
    }

    /// Number of users currently present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All currently present user identities.
    pub fn user_ids(&self) -> Vec<UserId> {
        self.entries.iter().map(|e| *e.key()).collect()
    }

    /// Drop all entries without closing any handles. Used at teardown;
    /// each connection's own lifecycle closes its socket.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
