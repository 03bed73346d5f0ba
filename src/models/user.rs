//! Signed-in user profile

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity exposed by the auth context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl UserProfile {
    /// Create a profile without a photo
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            photo: None,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("123123", "Demo User", "demo.user@example.com")
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
