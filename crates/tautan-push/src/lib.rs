//! # tautan-push
//!
//! Push notification fallback used when a chat recipient has no live
//! connection. Implements the `PushDispatch` gateway trait by handing a
//! payload plus the recipient's stored subscription to the configured
//! push delivery service. Strictly best-effort: failures are logged by
//! callers and never retried here.

pub mod dispatcher;

pub use dispatcher::WebPushDispatcher;
