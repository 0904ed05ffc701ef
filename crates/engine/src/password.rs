//! Argon2id password hashing for user credentials.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{EngineError, ResultEngine};

/// Hash a password into a PHC string.
pub(crate) fn hash_password(password: &str) -> ResultEngine<String> {
    if password.is_empty() {
        return Err(EngineError::Password(
            "password must not be empty".to_string(),
        ));
    }
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| EngineError::Password(err.to_string()))
}

/// Check a password against a stored PHC string.
pub(crate) fn verify_password(password: &str, hash: &str) -> ResultEngine<bool> {
    let parsed = PasswordHash::new(hash).map_err(|err| EngineError::Password(err.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(EngineError::Password(err.to_string())),
    }
}

/// Run [`hash_password`] on the blocking pool.
pub(crate) async fn hash_password_blocking(password: String) -> ResultEngine<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| EngineError::Password(format!("hashing task failed: {err}")))?
}

/// Run [`verify_password`] on the blocking pool.
pub(crate) async fn verify_password_blocking(password: String, hash: String) -> ResultEngine<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|err| EngineError::Password(format!("verification task failed: {err}")))?
}
