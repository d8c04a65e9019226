//! Inbound and outbound wire frame definitions.
//!
//! Frames are JSON objects tagged by a `type` field. Field names follow
//! the existing client protocol, which mixes camel and snake case.

use serde::{Deserialize, Serialize};

use tautan_core::types::UserId;
use tautan_entity::chat::{ChatMessage, ContactSummary};

/// Frames sent by the client over the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundFrame {
    /// Send a direct message.
    Chat {
        /// Recipient identity.
        #[serde(rename = "toId")]
        to_id: UserId,
        /// Message body.
        message: String,
    },
    /// Request the full thread with a peer.
    GetHistory {
        /// Peer identity.
        #[serde(rename = "toId")]
        to_id: UserId,
    },
    /// Notify a peer that the sender is typing.
    Typing {
        /// Peer identity.
        #[serde(rename = "toId")]
        to_id: UserId,
    },
}

/// Frames sent by the server to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrame {
    /// Contact list pushed once after registration.
    Contacts {
        /// Known peers with last message and unread count.
        contacts: Vec<ContactSummary>,
    },
    /// A delivered chat message, fields flattened into the frame.
    Chat {
        /// The full persisted record.
        #[serde(flatten)]
        message: ChatMessage,
    },
    /// Full thread with one peer.
    History {
        /// The peer the thread is with.
        #[serde(rename = "chatWith")]
        chat_with: UserId,
        /// Messages ordered by creation time ascending.
        messages: Vec<ChatMessage>,
    },
    /// A peer is typing.
    Typing {
        /// The typing user's identity.
        from_id: UserId,
    },
    /// Request-level failure report, sent only to the triggering connection.
    Error {
        /// Machine-readable error code.
        code: String,
        /// Human-readable description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_inbound_chat_parses_client_field_names() {
        let frame: InboundFrame =
            serde_json::from_str(r#"{"type":"chat","toId":2,"message":"hi"}"#).unwrap();
        match frame {
            InboundFrame::Chat { to_id, message } => {
                assert_eq!(to_id, 2);
                assert_eq!(message, "hi");
            }
            other => panic!("unexpected frame: {other:?}"),
        }
    }

    #[test]
    fn test_inbound_unknown_type_rejected() {
        let result = serde_json::from_str::<InboundFrame>(r#"{"type":"subscribe","toId":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_inbound_missing_field_rejected() {
        let result = serde_json::from_str::<InboundFrame>(r#"{"type":"chat","toId":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outbound_chat_flattens_message_record() {
        let frame = OutboundFrame::Chat {
            message: ChatMessage {
                id: 10,
                from_id: 1,
                to_id: 2,
                message: "hi".to_string(),
                timestamp: Utc::now(),
            },
        };

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["type"], "chat");
        assert_eq!(json["id"], 10);
        assert_eq!(json["from_id"], 1);
        assert_eq!(json["to_id"], 2);
        assert_eq!(json["message"], "hi");
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_outbound_history_field_names() {
        let frame = OutboundFrame::History {
            chat_with: 5,
            messages: vec![],
        };

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["type"], "history");
        assert_eq!(json["chatWith"], 5);
        assert!(json["messages"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_outbound_typing_field_names() {
        let frame = OutboundFrame::Typing { from_id: 9 };
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["type"], "typing");
        assert_eq!(json["from_id"], 9);
    }
}
