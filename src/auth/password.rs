/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash,
    #[error("invalid password hash format")]
    InvalidHashFormat,
    #[error("password does not match")]
    Mismatch,
}

/// Hash a password for storage. Salt generation and parameters follow the
/// Argon2id defaults.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(rand::thread_rng());
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::Hash)?
        .to_string();

    Ok(hash)
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::Mismatch)
}
