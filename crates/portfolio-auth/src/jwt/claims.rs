//! JWT claims embedded in session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::AuthenticatedUser;

/// Claims payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Username for convenience.
    pub username: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Converts the claims into the request-level identity.
    pub fn identity(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.sub,
            username: self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_exp(exp: i64) -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            username: "admin".to_string(),
            iat: Utc::now().timestamp(),
            exp,
        }
    }

    #[test]
    fn test_future_expiry_not_expired() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let claims = claims_with_exp(Utc::now().timestamp() - 1);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_identity_carries_id_and_username() {
        let claims = claims_with_exp(Utc::now().timestamp() + 60);
        let identity = claims.identity();
        assert_eq!(identity.id, claims.sub);
        assert_eq!(identity.username, "admin");
    }
}
