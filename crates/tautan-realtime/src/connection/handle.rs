//! Individual connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use tautan_core::types::{ConnectionId, UserId};

use crate::frame::OutboundFrame;

/// A handle to a single live connection.
///
/// Holds the bounded sender for pushing frames to the client's socket
/// task, plus identity metadata. The handle id guards deregistration: a
/// displaced handle cannot remove the entry a newer connection installed.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection id.
    pub id: ConnectionId,
    /// User who owns this connection.
    pub user_id: UserId,
    /// Sender for outbound frames.
    sender: mpsc::Sender<OutboundFrame>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still live.
    alive: AtomicBool,
}

impl ConnectionHandle {
    /// Create a new connection handle.
    pub fn new(user_id: UserId, sender: mpsc::Sender<OutboundFrame>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Queue an outbound frame for this connection.
    ///
    /// Returns `false` if the connection is closed or its buffer is full;
    /// a full buffer drops the frame (the transport owns backpressure).
    pub fn send(&self, frame: OutboundFrame) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(frame) {
            Ok(_) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Send buffer full, dropping frame");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                false
            }
        }
    }

    /// Check whether the connection is still live.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection as closed. No frames are queued afterwards.
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_delivers_frame() {
        let (tx, mut rx) = mpsc::channel(4);
        let handle = ConnectionHandle::new(1, tx);

        assert!(handle.send(OutboundFrame::Typing { from_id: 2 }));
        match rx.recv().await.unwrap() {
            OutboundFrame::Typing { from_id } => assert_eq!(from_id, 2),
            other => panic!("unexpected frame: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_after_close_fails() {
        let (tx, _rx) = mpsc::channel(4);
        let handle = ConnectionHandle::new(1, tx);

        handle.mark_closed();
        assert!(!handle.send(OutboundFrame::Typing { from_id: 2 }));
    }

    #[tokio::test]
    async fn test_dropped_receiver_marks_handle_closed() {
        let (tx, rx) = mpsc::channel(4);
        let handle = ConnectionHandle::new(1, tx);

        drop(rx);
        assert!(!handle.send(OutboundFrame::Typing { from_id: 2 }));
        assert!(!handle.is_alive());
    }
}
