//! Chat entities — persisted messages and contact summaries.

pub mod contact;
pub mod message;

pub use contact::ContactSummary;
pub use message::ChatMessage;
