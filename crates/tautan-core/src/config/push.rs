//! Push notification configuration.

use serde::{Deserialize, Serialize};

/// Settings for the third-party push delivery service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Whether the push fallback is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Endpoint of the push delivery service.
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// VAPID public key handed to browser clients.
    #[serde(default)]
    pub vapid_public_key: String,
    /// Contact address reported to the push service.
    #[serde(default = "default_contact")]
    pub contact_email: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Time-to-live for queued notifications, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u32,
}

fn default_true() -> bool {
    true
}

fn default_service_url() -> String {
    "http://localhost:4000/push".to_string()
}

fn default_contact() -> String {
    "mailto:ops@tautan.example".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_ttl() -> u32 {
    86400
}
