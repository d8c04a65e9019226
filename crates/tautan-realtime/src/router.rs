//! Message router — interprets inbound frames and produces persistence
//! calls, live forwarding, or push fallback.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use tautan_core::types::UserId;
use tautan_entity::gateway::{ChatStore, PushDispatch};

use crate::connection::ConnectionHandle;
use crate::frame::{InboundFrame, OutboundFrame};
use crate::presence::PresenceRegistry;

/// Error code reported to a sender whose operation hit the datastore.
const CODE_PERSISTENCE: &str = "PERSISTENCE";

/// Routes parsed inbound frames on behalf of an authenticated sender.
///
/// Failures are contained to the single frame that caused them: one
/// frame's error never affects subsequent frames or another connection.
pub struct MessageRouter {
    presence: Arc<PresenceRegistry>,
    store: Arc<dyn ChatStore>,
    push: Arc<dyn PushDispatch>,
}

impl std::fmt::Debug for MessageRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRouter").finish()
    }
}

impl MessageRouter {
    /// Create a new router.
    pub fn new(
        presence: Arc<PresenceRegistry>,
        store: Arc<dyn ChatStore>,
        push: Arc<dyn PushDispatch>,
    ) -> Self {
        Self {
            presence,
            store,
            push,
        }
    }

    /// Dispatch one parsed frame from the given connection.
    pub async fn handle_frame(&self, sender: &Arc<ConnectionHandle>, frame: InboundFrame) {
        match frame {
            InboundFrame::Chat { to_id, message } => {
                self.handle_chat(sender, to_id, &message).await;
            }
            InboundFrame::GetHistory { to_id } => {
                self.handle_get_history(sender, to_id).await;
            }
            InboundFrame::Typing { to_id } => {
                self.handle_typing(sender, to_id);
            }
        }
    }

    /// Persist a message, then deliver it: live-forward if the recipient
    /// is present, push fallback otherwise.
    ///
    /// Persistence is the durability boundary — if it fails, no delivery
    /// of any kind is attempted and the sender gets an error frame. The
    /// presence lookup result at the instant of check is authoritative;
    /// it is never re-checked after the push call returns.
    pub async fn handle_chat(&self, sender: &Arc<ConnectionHandle>, to_id: UserId, body: &str) {
        let from_id = sender.user_id;

        let record = match self.store.persist_message(from_id, to_id, body).await {
            Ok(record) => record,
            Err(e) => {
                error!(from_id, to_id, error = %e, "Failed to persist chat message");
                sender.send(OutboundFrame::Error {
                    code: CODE_PERSISTENCE.to_string(),
                    message: "Message could not be saved".to_string(),
                });
                return;
            }
        };

        match self.presence.lookup(to_id) {
            Some(recipient) => {
                debug!(from_id, to_id, message_id = record.id, "Delivering chat live");
                if !recipient.send(OutboundFrame::Chat { message: record }) {
                    warn!(from_id, to_id, "Recipient handle refused frame");
                }
            }
            None => {
                if let Err(e) = self.push.push_notify(to_id, from_id, body).await {
                    warn!(from_id, to_id, error = %e, "Push fallback failed");
                }
            }
        }
    }

    /// Send the requester the full thread with a peer, oldest first, and
    /// advance the requester's last-read marker for that peer.
    pub async fn handle_get_history(&self, sender: &Arc<ConnectionHandle>, peer: UserId) {
        let user = sender.user_id;

        let messages = match self.store.fetch_history(user, peer).await {
            Ok(messages) => messages,
            Err(e) => {
                error!(user, peer, error = %e, "Failed to fetch history");
                sender.send(OutboundFrame::Error {
                    code: CODE_PERSISTENCE.to_string(),
                    message: "History could not be loaded".to_string(),
                });
                return;
            }
        };

        sender.send(OutboundFrame::History {
            chat_with: peer,
            messages,
        });

        // Opening the thread counts as reading it.
        if let Err(e) = self.store.mark_thread_read(user, peer).await {
            warn!(user, peer, error = %e, "Failed to advance last-read marker");
        }
    }

    /// Relay a typing indicator if the recipient is present; otherwise
    /// drop it silently. Typing indicators are never queued, persisted,
    /// or pushed.
    pub fn handle_typing(&self, sender: &Arc<ConnectionHandle>, to_id: UserId) {
        if let Some(recipient) = self.presence.lookup(to_id) {
            info!(from_id = sender.user_id, to_id, "Relaying typing indicator");
            recipient.send(OutboundFrame::Typing {
                from_id: sender.user_id,
            });
        }
    }
}
