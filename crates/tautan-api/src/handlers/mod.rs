//! HTTP and WebSocket request handlers.

pub mod health;
pub mod push;
pub mod ws;
