//! JWT token issuance.
//!
//! Login flows live in the main application; this encoder shares its
//! secret and claim shape so tests and operational tooling can mint
//! valid tokens.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use tautan_core::config::auth::AuthConfig;
use tautan_core::error::AppError;
use tautan_core::types::UserId;

use super::claims::Claims;

/// Issues signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    token_ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish()
    }
}

impl JwtEncoder {
    /// Create a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_seconds: config.token_ttl_seconds as i64,
        }
    }

    /// Issue a token for a user with the configured lifetime.
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        self.issue_with_expiry(user_id, self.token_ttl_seconds)
    }

    /// Issue a token expiring `ttl_seconds` from now (may be negative, for
    /// expiry tests).
    pub fn issue_with_expiry(&self, user_id: UserId, ttl_seconds: i64) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            iat: now,
            exp: now + ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(
                tautan_core::error::ErrorKind::Internal,
                "Failed to encode token",
                e,
            ))
    }
}
