//! Set-Cookie construction and Cookie-header parsing for the session token.

use http::HeaderMap;
use http::header::{COOKIE, SET_COOKIE};

use crate::config::GatewayConfig;

use super::errors::SessionError;
use super::token::mint_session_token;

fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
) -> Result<&'a HeaderMap, SessionError> {
    let cookie = format!("{name}={value}; SameSite=Lax; Secure; HttpOnly; Path=/; Max-Age={max_age}");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

/// Headers establishing a fresh session for `user_id`.
pub(crate) fn new_session_headers(
    config: &GatewayConfig,
    user_id: &str,
) -> Result<HeaderMap, SessionError> {
    let token = mint_session_token(&config.secret, user_id, config.cookie_max_age)?;
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &config.cookie_name, &token, config.cookie_max_age)?;
    tracing::debug!("Created session cookie for {user_id}");
    Ok(headers)
}

/// Headers clearing the session cookie. Safe to send to a client that
/// never had one.
pub(crate) fn expired_session_headers(config: &GatewayConfig) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &config.cookie_name, "deleted", -86400)?;
    Ok(headers)
}

/// Pull the raw session token out of the request's Cookie header, if any.
pub(crate) fn session_token_from_headers<'a>(
    headers: &'a HeaderMap,
    cookie_name: &str,
) -> Result<Option<&'a str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::HeaderError("Invalid cookie header".to_string())
    })?;

    let token = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    if token.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(token)
}
