//! # tautan-auth
//!
//! JWT handling for the chat service. Tokens are issued by the main
//! application at login; this crate verifies them (signature + expiry)
//! and extracts the numeric user identity. An encoder counterpart exists
//! for tests and operational tooling.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
