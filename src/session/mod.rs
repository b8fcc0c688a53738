mod cookie;
mod errors;
mod token;

pub use errors::SessionError;

pub(crate) use cookie::{expired_session_headers, new_session_headers, session_token_from_headers};
pub(crate) use token::verify_session_token;
