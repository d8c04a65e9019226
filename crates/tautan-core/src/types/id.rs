//! Typed identifiers.
//!
//! User and message identifiers are opaque integers assigned by the
//! relational store; connection identifiers are generated per socket.

use uuid::Uuid;

/// A user identity, assigned at registration and never mutated here.
pub type UserId = i64;

/// A persisted chat message identifier.
pub type MessageId = i64;

/// Identifies one live connection handle. Used to guard deregistration
/// against removing an entry installed by a newer connection.
pub type ConnectionId = Uuid;
