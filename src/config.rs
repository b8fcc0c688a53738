use std::env;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_SECRET: &str = "default_secret_key_change_in_production";
const DEFAULT_COOKIE_NAME: &str = "__Host-SessionId";
const DEFAULT_COOKIE_MAX_AGE: i64 = 3600;

/// Runtime configuration for the gateway.
///
/// Built once at startup from environment variables and passed into the
/// router via axum state; nothing consults the environment afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port the server listens on (all interfaces).
    pub port: u16,
    /// HMAC key for session tokens. Restarting with a new secret
    /// invalidates all outstanding sessions.
    pub secret: Vec<u8>,
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Session TTL in seconds, used for both the cookie Max-Age and the
    /// token expiry claim.
    pub cookie_max_age: i64,
}

impl GatewayConfig {
    /// Read configuration from the environment, falling back to defaults
    /// so the binary runs without any setup.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let secret = match env::var("AUTH_SERVER_SECRET") {
            Ok(secret) => secret.into_bytes(),
            Err(_) => {
                tracing::warn!(
                    "AUTH_SERVER_SECRET not set, using built-in default; \
                     set it in production"
                );
                DEFAULT_SECRET.as_bytes().to_vec()
            }
        };

        let cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string());

        let cookie_max_age = env::var("SESSION_COOKIE_MAX_AGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_COOKIE_MAX_AGE);

        Self {
            port,
            secret,
            cookie_name,
            cookie_max_age,
        }
    }
}
