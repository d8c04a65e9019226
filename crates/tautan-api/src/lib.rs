//! # tautan-api
//!
//! HTTP surface of the chat service: the WebSocket upgrade (authenticated
//! before the upgrade completes), push subscription endpoints, and health.
//! All chat semantics live in `tautan-realtime`; handlers here only move
//! bytes between the transport and the engine.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
