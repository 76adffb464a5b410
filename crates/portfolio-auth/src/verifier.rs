//! Credential verification — the login flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_database::repositories::UserRepository;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// A well-formed Argon2id hash that no password matches. Verified on the
/// unknown-user path so that lookup misses cost the same as mismatches.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Verifies submitted credentials and issues session tokens.
///
/// Stateless: every call is a pure function of the submitted credentials,
/// the credential store contents, and the signing secret held by the
/// encoder. The only side effect is the store lookup itself — no audit
/// log, no rate limiting, no login bookkeeping.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<UserRepository>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The signed session token.
    pub token: String,
    /// The canonical username from the credential record.
    pub username: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl CredentialVerifier {
    /// Creates a new verifier over the given credential store.
    pub fn new(users: Arc<UserRepository>, hasher: PasswordHasher, encoder: JwtEncoder) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Verifies a username/password pair and returns a signed session token.
    ///
    /// Unknown usernames and wrong passwords produce the identical error so
    /// that the response never reveals which of the two was wrong.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }

        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                // Burn a verification so this path is not observably faster.
                let _ = self.hasher.verify(password, DUMMY_HASH);
                return Err(Self::invalid_credentials());
            }
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(Self::invalid_credentials());
        }

        let issued = self.encoder.issue(user.id, &user.username)?;

        Ok(LoginOutcome {
            token: issued.token,
            username: user.username,
            expires_at: issued.expires_at,
        })
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized("Invalid credentials")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_hash_is_well_formed_and_never_matches() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("any password at all", DUMMY_HASH).unwrap());
    }
}
