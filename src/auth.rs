//! Authentication context
//!
//! There is no real sign-in. The context is built once at startup from the
//! configured profile and handed to whatever needs to know who is using the
//! app.

use crate::config::settings::Settings;
use crate::models::UserProfile;

/// Read-only identity of the current user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user: UserProfile,
}

impl AuthContext {
    /// Create a context for a fixed user
    pub fn new(user: UserProfile) -> Self {
        Self { user }
    }

    /// Create a context from the profile stored in settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.profile.clone())
    }

    /// The signed-in user
    pub fn user(&self) -> &UserProfile {
        &self.user
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let auth = AuthContext::default();
        assert_eq!(auth.user().id, "123123");
        assert!(auth.user().photo.is_none());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.profile = UserProfile::new("42", "Ada", "ada@example.com");

        let auth = AuthContext::from_settings(&settings);
        assert_eq!(auth.user().name, "Ada");
        assert_eq!(auth.user().email, "ada@example.com");
    }
}
