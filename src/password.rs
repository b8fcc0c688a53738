//! Salted password hashing for the in-memory user table.
//!
//! Hashes are self-describing strings of the form
//! `pbkdf2-sha256$<iterations>$<salt>$<digest>` with base64url fields,
//! so the verifier never needs out-of-band parameters.

use std::num::NonZeroU32;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::rand::SecureRandom;
use ring::{digest, pbkdf2};

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const CREDENTIAL_LEN: usize = digest::SHA256_OUTPUT_LEN;
const ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let rng = ring::rand::SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| PasswordError::Crypto("Failed to generate salt".to_string()))?;

    let mut credential = [0u8; CREDENTIAL_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        ITERATIONS,
        &salt,
        password.as_bytes(),
        &mut credential,
    );

    Ok(format!(
        "{SCHEME}${ITERATIONS}${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(credential)
    ))
}

/// Verify a submitted password against a stored hash string.
///
/// Returns `Ok(false)` on mismatch; `Err` is reserved for stored strings
/// that are not in the expected format.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let mut parts = stored.split('$');
    let (scheme, iterations, salt, credential) = match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(scheme), Some(iterations), Some(salt), Some(credential), None) => {
            (scheme, iterations, salt, credential)
        }
        _ => {
            return Err(PasswordError::Format(
                "Stored hash does not have four fields".to_string(),
            ));
        }
    };

    if scheme != SCHEME {
        return Err(PasswordError::Format(format!(
            "Unsupported hash scheme: {scheme}"
        )));
    }

    let iterations: u32 = iterations
        .parse()
        .map_err(|_| PasswordError::Format("Invalid iteration count".to_string()))?;
    let iterations = NonZeroU32::new(iterations)
        .ok_or_else(|| PasswordError::Format("Iteration count must be nonzero".to_string()))?;

    let salt = URL_SAFE_NO_PAD
        .decode(salt)
        .map_err(|_| PasswordError::Format("Failed to decode salt".to_string()))?;
    let credential = URL_SAFE_NO_PAD
        .decode(credential)
        .map_err(|_| PasswordError::Format("Failed to decode digest".to_string()))?;

    // ring compares the derived key in constant time
    Ok(pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &credential,
    )
    .is_ok())
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum PasswordError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Invalid format: {0}")]
    Format(String),
}
