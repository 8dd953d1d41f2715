//! Argon2id password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::AccountError;

/// Hashes `password` with a fresh random salt.
///
/// The result is a self-describing PHC string (algorithm, parameters, salt
/// and digest), so it can be verified later without extra metadata.
///
/// # Errors
///
/// Returns `AccountError::Hash` if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Hash(e.to_string()))
}

/// Checks `password` against a stored PHC hash.
///
/// Returns `Ok(false)` when the password simply does not match.
///
/// # Errors
///
/// Returns `AccountError::Hash` if `stored_hash` is not a valid PHC string
/// or verification fails for any reason other than a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AccountError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AccountError::Hash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AccountError::Hash(e.to_string())),
    }
}
