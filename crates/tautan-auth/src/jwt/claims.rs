//! JWT claims structure shared with the token issuer.

use serde::{Deserialize, Serialize};

use tautan_core::types::UserId;

/// Claims payload embedded in every bearer token.
///
/// The `userId` field name is fixed by the issuing backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's identity.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Check whether this token has expired.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.exp
    }
}
