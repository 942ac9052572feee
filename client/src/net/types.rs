//! Response types for the chat server's REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/v4/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
}

impl User {
    /// Nickname when set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.nickname.trim().is_empty() { &self.username } else { &self.nickname }
    }
}
