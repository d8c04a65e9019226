//! Connection handles — the sending side of one live socket.

pub mod handle;

pub use handle::ConnectionHandle;
