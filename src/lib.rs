//! login_gateway - Minimal cookie-session login gateway built on axum
//!
//! A single small service: a hard-coded in-memory user table, a signed
//! session cookie, and three browser flows (login, dashboard, logout).
//! Session state is entirely client-held; the server only verifies the
//! HMAC signature and expiry of the incoming token.

mod config;
mod password;
mod session;
mod state;
mod userdb;
mod web;

pub use config::GatewayConfig;
pub use password::{PasswordError, hash_password, verify_password};
pub use session::SessionError;
pub use state::AppState;
pub use userdb::{User, UserStore};
pub use web::router;
