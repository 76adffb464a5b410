//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use portfolio_core::config::auth::AuthConfig;
use portfolio_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens against the shared signing secret.
///
/// Validation is fully stateless: a token is accepted iff its signature
/// verifies and its expiry has not passed. There is no revocation list,
/// so a decoder constructed with the same secret always gives the same
/// answer for the same token.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning its claims.
    ///
    /// Every failure mode (bad signature, malformed token, expired) maps
    /// to the same caller-visible error; the specific cause is only
    /// logged.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "Token validation failed");
                AppError::forbidden("Invalid or expired token")
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use portfolio_core::error::ErrorKind;
    use uuid::Uuid;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_hours: 24,
            admin_username: "admin".to_string(),
        }
    }

    #[test]
    fn test_issued_token_decodes_to_same_identity() {
        let config = test_config("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let issued = encoder.issue(user_id, "admin").unwrap();

        let claims = decoder.decode(&issued.token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_decode_is_idempotent() {
        let config = test_config("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue(Uuid::new_v4(), "admin").unwrap();
        let first = decoder.decode(&issued.token).unwrap();
        let second = decoder.decode(&issued.token).unwrap();
        assert_eq!(first.identity(), second.identity());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config("secret-a"));
        let decoder = JwtDecoder::new(&test_config("secret-b"));

        let issued = encoder.issue(Uuid::new_v4(), "admin").unwrap();
        let err = decoder.decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "Invalid or expired token");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config("test-secret");
        let decoder = JwtDecoder::new(&config);

        // Sign a claim that expired an hour ago, well past the leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "admin".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&test_config("test-secret"));
        let err = decoder.decode("garbage").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
