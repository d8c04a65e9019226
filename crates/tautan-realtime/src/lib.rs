//! # tautan-realtime
//!
//! Real-time chat engine for Tautan. Provides:
//!
//! - An in-memory presence registry mapping each authenticated user to
//!   exactly one live connection handle
//! - Per-connection handles backed by bounded outbound channels
//! - A message router implementing persist-then-deliver chat semantics
//!   with push fallback for offline recipients
//! - Typing indicator relay and full-thread history retrieval
//!
//! Transport handling (the WebSocket upgrade and socket loop) lives in
//! `tautan-api`; this crate is transport-agnostic.

pub mod connection;
pub mod engine;
pub mod frame;
pub mod presence;
pub mod router;

pub use connection::ConnectionHandle;
pub use engine::ChatEngine;
pub use frame::{InboundFrame, OutboundFrame};
pub use presence::PresenceRegistry;
pub use router::MessageRouter;
