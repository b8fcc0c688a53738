use std::collections::HashMap;

use crate::password::{PasswordError, hash_password};

use super::types::User;

/// Read-only user table, seeded at startup and immutable thereafter.
///
/// Because nothing mutates the table during request handling, it can be
/// shared across connections without any locking.
pub struct UserStore {
    users: HashMap<String, User>,
    /// Hash verified against when a login names an unknown user, so the
    /// unknown-user and wrong-password paths cost the same.
    decoy_hash: String,
}

impl UserStore {
    /// Build a store from plaintext credentials, hashing each at startup.
    pub fn with_users<'a, I>(credentials: I) -> Result<Self, PasswordError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut users = HashMap::new();
        for (username, password) in credentials {
            users.insert(
                username.to_string(),
                User {
                    username: username.to_string(),
                    password_hash: hash_password(password)?,
                },
            );
        }
        let decoy_hash = hash_password("decoy-password-never-matched")?;
        Ok(Self { users, decoy_hash })
    }

    /// The fixed table the gateway ships with.
    pub fn seeded() -> Result<Self, PasswordError> {
        Self::with_users([("admin", "password123")])
    }

    pub fn get_user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn decoy_hash(&self) -> &str {
        &self.decoy_hash
    }
}
