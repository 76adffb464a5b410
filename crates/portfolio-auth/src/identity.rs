//! The authenticated identity attached to admitted requests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity recovered from a valid session token.
///
/// Ephemeral: exists only for the duration of one request. Handlers read
/// it to know *who* is acting; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// The user's ID.
    pub id: Uuid,
    /// The username (convenience field from the token claims).
    pub username: String,
}
