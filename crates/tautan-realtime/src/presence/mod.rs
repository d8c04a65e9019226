//! Presence — which users currently have a live, authenticated connection.

pub mod registry;

pub use registry::PresenceRegistry;
