//! Account boundary: profile service, demo login and the persisted session flag.

pub mod auth;
pub mod profile;
pub mod session;

pub use auth::Authenticator;
pub use profile::{InMemoryProfileApi, ProfileApi, UserProfile};
pub use session::{SessionFile, SessionState, SessionUser};

use crate::core::{Result, StoreError};
use serde::{Deserialize, Serialize};

/// Result of a credential-checked operation, carrying a user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
}

impl OperationOutcome {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Hashes a password using bcrypt with the given cost
fn hash_password(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Malformed hashes count as a mismatch
fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// [`hash_password`] on the blocking pool
async fn hash_password_blocking(password: &str, cost: u32) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?
}

/// [`verify_password`] on the blocking pool; a failed task counts as a mismatch
async fn verify_password_blocking(password: &str, hash: &str) -> bool {
    let (password, hash) = (password.to_string(), hash.to_string());
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .unwrap_or(false)
}
