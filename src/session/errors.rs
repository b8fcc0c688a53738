use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Structural or signature failure; deliberately carries no detail
    /// so callers cannot distinguish tampering from garbage.
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session expired")]
    Expired,

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Header error: {0}")]
    HeaderError(String),
}
