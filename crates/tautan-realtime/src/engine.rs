//! Top-level chat engine that ties presence, routing, and collaborator
//! gateways together.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use tautan_core::config::realtime::RealtimeConfig;
use tautan_core::types::{ConnectionId, UserId};
use tautan_entity::gateway::{ChatStore, PushDispatch};

use crate::connection::ConnectionHandle;
use crate::frame::{InboundFrame, OutboundFrame};
use crate::presence::PresenceRegistry;
use crate::router::MessageRouter;

/// Central engine owning the presence registry and the message router.
///
/// Constructed once at process start; torn down by dropping all presence
/// entries without forcibly closing any socket.
pub struct ChatEngine {
    /// Presence registry — the only shared mutable state of the subsystem.
    presence: Arc<PresenceRegistry>,
    /// Message router.
    router: MessageRouter,
    /// Persistence gateway, used here for the contact list on connect.
    store: Arc<dyn ChatStore>,
    /// Outbound buffer size per connection.
    buffer_size: usize,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine").finish()
    }
}

impl ChatEngine {
    /// Create a new engine with the given collaborator gateways.
    pub fn new(
        config: &RealtimeConfig,
        store: Arc<dyn ChatStore>,
        push: Arc<dyn PushDispatch>,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        let presence = Arc::new(PresenceRegistry::new());
        let router = MessageRouter::new(presence.clone(), store.clone(), push);

        info!("Chat engine initialized");

        Self {
            presence,
            router,
            store,
            buffer_size: config.channel_buffer_size,
            shutdown_tx,
        }
    }

    /// Register an authenticated connection.
    ///
    /// Installs the handle in the presence registry (displacing any prior
    /// connection for the same identity) and pushes the user's contact
    /// list. Returns the handle and the receiver the socket task drains.
    ///
    /// Must only be called after the handshake credential has verified.
    pub async fn register_connection(
        &self,
        user_id: UserId,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<OutboundFrame>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let handle = Arc::new(ConnectionHandle::new(user_id, tx));

        if let Some(displaced) = self.presence.register(user_id, handle.clone()) {
            // The old socket's own lifecycle closes it; we only stop
            // queueing frames to it.
            warn!(
                user_id,
                old_conn = %displaced.id,
                new_conn = %handle.id,
                "Connection displaced by newer login"
            );
            displaced.mark_closed();
        }

        info!(conn_id = %handle.id, user_id, "Connection registered");

        match self.store.fetch_contacts(user_id).await {
            Ok(contacts) => {
                handle.send(OutboundFrame::Contacts { contacts });
            }
            Err(e) => {
                warn!(user_id, error = %e, "Failed to load contact list");
            }
        }

        (handle, rx)
    }

    /// Process one raw inbound message from a connection.
    ///
    /// Malformed frames (unparseable payload, unknown `type`) are logged
    /// and dropped; the connection stays open.
    pub async fn handle_inbound(&self, handle: &Arc<ConnectionHandle>, raw: &str) {
        let frame: InboundFrame = match serde_json::from_str(raw) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(
                    conn_id = %handle.id,
                    user_id = handle.user_id,
                    error = %e,
                    "Dropping malformed frame"
                );
                return;
            }
        };

        self.router.handle_frame(handle, frame).await;
    }

    /// Deregister a connection after its transport closed.
    ///
    /// Guarded by the connection id: if a newer connection for the same
    /// identity already replaced this one, the registry is untouched.
    pub fn disconnect(&self, user_id: UserId, conn_id: ConnectionId) {
        if self.presence.deregister(user_id, conn_id) {
            info!(conn_id = %conn_id, user_id, "Connection deregistered");
        }
    }

    /// Whether a user currently has a live connection.
    pub fn is_online(&self, user_id: UserId) -> bool {
        self.presence.is_online(user_id)
    }

    /// Number of users currently connected.
    pub fn connection_count(&self) -> usize {
        self.presence.len()
    }

    /// Returns a shutdown receiver for coordination with socket tasks.
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Initiate shutdown: signal socket tasks and drop all presence
    /// entries. No handle is forcibly closed.
    pub fn shutdown(&self) {
        info!("Shutting down chat engine");
        let _ = self.shutdown_tx.send(());
        self.presence.clear();
    }
}
