use askama::Template;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::{TypedHeader, headers};
use http::{StatusCode, header::LOCATION};
use serde::{Deserialize, Serialize};

use crate::session::{expired_session_headers, new_session_headers};
use crate::state::AppState;

use super::extract::AuthUser;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "dashboard.j2")]
struct DashboardTemplate<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
pub(super) struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub(super) struct LoginResponse {
    success: bool,
    message: String,
}

impl LoginResponse {
    fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

// Browser-navigation redirects are a literal 302 Found.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

pub(super) async fn index(user: Option<AuthUser>) -> Result<Response, (StatusCode, String)> {
    match user {
        Some(_) => Ok(found("/dashboard")),
        None => {
            let template = LoginTemplate {
                message: "Sign in to continue",
            };
            let html = Html(
                template
                    .render()
                    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
            );
            Ok(html.into_response())
        }
    }
}

pub(super) async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!("Rejected login body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::failure("Malformed request body")),
            )
                .into_response();
        }
    };

    // An unknown username still pays for a full verification against the
    // decoy hash, keeping the two failure paths indistinguishable.
    let verified = match state.users.get_user(&request.username) {
        Some(user) => crate::password::verify_password(&request.password, &user.password_hash),
        None => crate::password::verify_password(&request.password, state.users.decoy_hash())
            .map(|_| false),
    };

    match verified {
        Ok(true) => {
            let headers = match new_session_headers(&state.config, &request.username) {
                Ok(headers) => headers,
                Err(e) => {
                    tracing::error!("Failed to create session: {e}");
                    return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
                }
            };
            tracing::info!("User {} logged in", request.username);
            (
                StatusCode::OK,
                headers,
                Json(LoginResponse::success("Login successful!")),
            )
                .into_response()
        }
        Ok(false) => {
            tracing::info!("Failed login attempt for {}", request.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::failure("Invalid credentials")),
            )
                .into_response()
        }
        Err(e) => {
            // A stored hash we cannot parse is a server defect; surface the
            // same 401 shape so nothing about the account leaks.
            tracing::error!("Password verification error for {}: {e}", request.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::failure("Invalid credentials")),
            )
                .into_response()
        }
    }
}

pub(super) async fn dashboard(user: AuthUser) -> Result<Response, (StatusCode, String)> {
    let template = DashboardTemplate {
        username: &user.user_id,
    };
    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html.into_response())
}

/// Clears the session cookie and bounces back to the login page.
/// Logging out without a session is not an error.
pub(super) async fn logout(
    State(state): State<AppState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Response {
    if let Some(TypedHeader(cookies)) = &cookies {
        if cookies.get(&state.config.cookie_name).is_some() {
            tracing::debug!("Clearing session cookie");
        }
    }

    match expired_session_headers(&state.config) {
        Ok(headers) => (headers, found("/")).into_response(),
        Err(e) => {
            tracing::error!("Failed to build logout headers: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
