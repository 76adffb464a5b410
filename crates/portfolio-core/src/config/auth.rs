//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token signing configuration.
///
/// The signing secret is read once at startup and injected into both the
/// token encoder and decoder; every instance of a multi-node deployment
/// must be configured with the same secret or tokens issued by one node
/// will be rejected by another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Username of the admin account bootstrapped by the seed tool.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_admin_username() -> String {
    "admin".to_string()
}
