mod extract;
mod handlers;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the gateway router with all routes attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/dashboard", get(handlers::dashboard))
        .route("/logout", get(handlers::logout))
        .with_state(state)
}
