use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};

use crate::error::PortalError;

/// Credential primitives shared by all five role collections.
///
/// Hash/verify logic is implemented exactly once; the role-specific record
/// types simply store the resulting PHC string. Plaintext passwords exist
/// only on the stack of these functions; they are never persisted, logged,
/// or compared directly.

/// Normalizes an email for storage and lookup: trimmed and lowercased.
/// Applied before every uniqueness check so `A@x.com` and `a@x.com` are the
/// same identity.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Hashes a password with Argon2id and a per-record random salt.
///
/// Hashing is CPU-bound, so it runs on the blocking pool rather than the
/// async request loop.
pub async fn hash_password(plaintext: String) -> Result<String, PortalError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PortalError::Persistence(format!("password hashing failed: {e}")))
    })
    .await
    .map_err(|e| PortalError::Persistence(format!("hashing task failed: {e}")))?
}

/// Verifies a candidate password against a stored PHC hash string.
///
/// Argon2's verifier recomputes the hash under the stored salt and compares
/// with constant-time semantics. Returns `WrongPassword` on mismatch; a
/// malformed stored hash is a persistence-level fault, not a user error.
pub async fn verify_password(plaintext: String, stored_hash: String) -> Result<(), PortalError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash)
            .map_err(|e| PortalError::Persistence(format!("stored hash unreadable: {e}")))?;
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .map_err(|_| PortalError::WrongPassword)
    })
    .await
    .map_err(|e| PortalError::Persistence(format!("verification task failed: {e}")))?
}
