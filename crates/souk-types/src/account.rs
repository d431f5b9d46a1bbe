use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A registered identity.
///
/// The username is the natural key but uniqueness is not enforced; lookup
/// operations that scan by username resolve to the first match in insertion
/// order. Accounts start unapproved and only an admin flips the flag.
/// Credentials are stored and compared in plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub approved: bool,
}

impl Account {
    /// Create an unapproved account, as produced by registration.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
            approved: false,
        }
    }

    /// True if the stored credentials match exactly.
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "username: {}, password: {}, role: {}, approved: {}",
            self.username, self.password, self.role, self.approved
        )
    }
}
