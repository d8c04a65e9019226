//! # tautan-entity
//!
//! Domain models for the Tautan chat service, plus the gateway traits
//! (`ChatStore`, `PushDispatch`) that the real-time engine consumes.
//! Concrete implementations live in `tautan-database` and `tautan-push`.

pub mod chat;
pub mod gateway;
pub mod push;
pub mod user;

pub use chat::{ChatMessage, ContactSummary};
pub use gateway::{ChatStore, PushDispatch};
pub use push::PushSubscription;
pub use user::User;
