use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use http::{Method, StatusCode, header::LOCATION, request::Parts};

use crate::session::{session_token_from_headers, verify_session_token};
use crate::state::AppState;

/// Rejection for requests without a valid session.
///
/// Browser navigations (GET) are bounced to the login page; anything
/// else gets a bare 401. The redirect is a literal 302 Found.
pub(crate) struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("No valid session, redirecting to /");
            (StatusCode::FOUND, [(LOCATION, "/")]).into_response()
        } else {
            tracing::debug!("No valid session, unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// Authenticated user, available as an axum extractor.
///
/// Extraction succeeds only when the request carries a session cookie
/// whose signature verifies under the current process secret and whose
/// expiry lies in the future. Any failure along the way is treated as
/// "not logged in", never as a server error.
#[derive(Clone, Debug)]
pub(crate) struct AuthUser {
    /// Username asserted by the session token.
    pub user_id: String,
    /// When the session expires.
    #[allow(dead_code)]
    pub expires_at: DateTime<Utc>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let method = parts.method.clone();

        let token = match session_token_from_headers(&parts.headers, &state.config.cookie_name) {
            Ok(Some(token)) => token,
            Ok(None) => return Err(AuthRedirect::new(method)),
            Err(e) => {
                tracing::debug!("Failed to read session cookie: {e}");
                return Err(AuthRedirect::new(method));
            }
        };

        let claims = verify_session_token(&state.config.secret, token).map_err(|e| {
            tracing::debug!("Session token rejected: {e}");
            AuthRedirect::new(method)
        })?;

        Ok(AuthUser {
            user_id: claims.user_id,
            expires_at: claims.expires_at,
        })
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}
