//! Contact summary entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tautan_core::types::UserId;

/// One entry of the contact list pushed to a user on connect.
///
/// Serialized field names match the wire protocol, which mixes snake and
/// camel case for historical reasons.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSummary {
    /// The peer's user identity.
    pub id: UserId,
    /// The peer's display name.
    pub full_name: String,
    /// The most recent message exchanged with this peer, if any.
    #[serde(rename = "lastMessage")]
    pub last_message: Option<String>,
    /// Messages from the peer newer than the user's last-read marker.
    #[serde(rename = "unreadCount")]
    pub unread_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let contact = ContactSummary {
            id: 7,
            full_name: "Budi Santoso".to_string(),
            last_message: Some("halo".to_string()),
            unread_count: 3,
        };

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["full_name"], "Budi Santoso");
        assert_eq!(json["lastMessage"], "halo");
        assert_eq!(json["unreadCount"], 3);
    }
}
