//! # portfolio-auth
//!
//! Authentication boundary for the portfolio backend.
//!
//! ## Modules
//!
//! - `jwt` — session token creation and validation (HS256)
//! - `password` — Argon2id password hashing and verification
//! - `identity` — the claim payload attached to authenticated requests
//! - `verifier` — the login flow: credentials in, signed token out
//!
//! Both the verifier and the token decoder are stateless functions of
//! their inputs plus the signing secret injected at construction time;
//! token validity is decided entirely by signature and expiry.

pub mod identity;
pub mod jwt;
pub mod password;
pub mod verifier;

pub use identity::AuthenticatedUser;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use verifier::CredentialVerifier;
