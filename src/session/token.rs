//! Stateless signed session tokens.
//!
//! There is no server-side session table: the cookie value itself is the
//! session, an HMAC-authenticated claims payload. Wire form is
//! `base64url(claims_json) "." base64url(hmac_sha256(secret, claims_json))`.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::SessionError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct SessionClaims {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Mint a signed token asserting `user_id` for the next `max_age` seconds.
pub(crate) fn mint_session_token(
    secret: &[u8],
    user_id: &str,
    max_age: i64,
) -> Result<String, SessionError> {
    let claims = SessionClaims {
        user_id: user_id.to_string(),
        expires_at: Utc::now() + Duration::seconds(max_age),
    };
    let payload = serde_json::to_vec(&claims).map_err(|e| SessionError::Crypto(e.to_string()))?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(&payload);
    let tag = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode(tag)
    ))
}

/// Verify a token against the current process secret.
///
/// The signature is checked in constant time before the payload is
/// parsed; only then is the expiry claim compared against now.
pub(crate) fn verify_session_token(
    secret: &[u8],
    token: &str,
) -> Result<SessionClaims, SessionError> {
    let (payload_b64, tag_b64) = token.split_once('.').ok_or(SessionError::InvalidToken)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| SessionError::InvalidToken)?;
    let tag = URL_SAFE_NO_PAD
        .decode(tag_b64)
        .map_err(|_| SessionError::InvalidToken)?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(&payload);
    let expected = mac.finalize().into_bytes();

    if !bool::from(expected.as_slice().ct_eq(&tag)) {
        return Err(SessionError::InvalidToken);
    }

    let claims: SessionClaims =
        serde_json::from_slice(&payload).map_err(|_| SessionError::InvalidToken)?;

    if claims.expires_at <= Utc::now() {
        tracing::debug!("Session expired at {}", claims.expires_at);
        return Err(SessionError::Expired);
    }

    Ok(claims)
}
