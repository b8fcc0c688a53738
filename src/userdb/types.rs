/// A registered user.
///
/// Records exist only in memory, created once at startup; there is no
/// registration or deletion API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Login identifier, unique within the store.
    pub username: String,
    /// Salted password hash (see [`crate::password`]).
    pub password_hash: String,
}
