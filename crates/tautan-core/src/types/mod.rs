//! Shared type definitions.

pub mod id;

pub use id::{ConnectionId, MessageId, UserId};
