//! Password hashing and credential verification
//!
//! New hashes use Argon2id. Hashes imported from the previous deployment are
//! bcrypt and remain verifiable. Rows that were never hashed are checked with
//! the legacy rules in [`verify_credential`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use portal_core::Credential;

use crate::error::AppError;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against an Argon2 (PHC) or bcrypt hash
///
/// # Errors
/// Returns an error if the hash is in neither format
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    if BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix)) {
        return bcrypt::verify(password, hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid bcrypt hash: {e}")));
    }

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// How an unhashed (legacy) credential is compared when the input is not the member id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyMatch {
    /// Treat the stored value as a hash; an unparseable value never matches (sign-in)
    Hash,
    /// Compare the stored value literally (password change)
    Literal,
}

/// Check `input` against an officer's stored credential.
///
/// Hashed credentials are verified against the hash only. Legacy credentials
/// accept the member id itself, then fall back to `legacy`.
///
/// # Errors
/// Returns an error when a credential flagged as hashed holds an unreadable hash
pub fn verify_credential(
    input: &str,
    credential: &Credential,
    member_id: &str,
    legacy: LegacyMatch,
) -> Result<bool, AppError> {
    if input.is_empty() {
        return Ok(false);
    }

    let stored = credential.secret.as_deref();

    if credential.is_hashed {
        return match stored {
            Some(hash) => verify_password(input, hash),
            None => Ok(false),
        };
    }

    if !member_id.is_empty() && input == member_id {
        return Ok(true);
    }

    Ok(match (stored, legacy) {
        (None, _) => false,
        (Some(value), LegacyMatch::Hash) => verify_password(input, value).unwrap_or(false),
        (Some(value), LegacyMatch::Literal) => input == value,
    })
}
