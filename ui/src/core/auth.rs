//! Session state shared through context.
//!
//! Launchers provide a `Signal<AuthState>`; the sign-up panel is the only
//! writer. Everything else reads it through [`use_auth_status`].

use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub display_name: Option<String>,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Blank names sign in anonymously.
    pub fn signed_in(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        Self {
            is_logged_in: true,
            display_name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// Session signal from context, if a launcher provided one.
pub fn use_auth_signal() -> Option<Signal<AuthState>> {
    try_use_context::<Signal<AuthState>>()
}

/// Reactive signed-in flag. Without a provider the session is signed out.
pub fn use_auth_status() -> bool {
    use_auth_signal()
        .map(|auth| auth.read().is_logged_in)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_logged_in);
        assert_eq!(state, AuthState::signed_out());
    }

    #[test]
    fn signed_in_trims_name() {
        let state = AuthState::signed_in("  Amina ");
        assert!(state.is_logged_in);
        assert_eq!(state.display_name.as_deref(), Some("Amina"));
    }

    #[test]
    fn blank_name_is_anonymous() {
        assert_eq!(AuthState::signed_in("   ").display_name, None);
    }
}
