//! Real-time WebSocket configuration.

use serde::{Deserialize, Serialize};

/// Settings for the WebSocket chat engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound frame buffer size per connection.
    #[serde(default = "default_buffer_size")]
    pub channel_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    64
}
