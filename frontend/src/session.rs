//! Session state derived from the persisted token.
//!
//! A non-empty token in localStorage means signed in. Nothing here checks
//! expiry; the catalog rejects stale tokens on its own.

use shared::protocol::TOKEN_STORAGE_KEY;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

impl SessionState {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() => SessionState::Authenticated,
            _ => SessionState::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }

    /// Whether elements marked auth-required should be hidden
    pub fn hides_auth_required(self) -> bool {
        !self.is_authenticated()
    }
}

/// Read the session token from localStorage
pub fn load_token() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

/// Persist the session token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::error!("Failed to persist session token");
        }
    }
}

/// Remove the session token from localStorage
pub fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

/// Session value handed down to every page through context.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    /// Raw token, forwarded to the catalog as a bearer credential
    pub token: Option<String>,
    /// Explicit sign-in with a freshly issued token
    pub login: Callback<String>,
    /// Explicit sign-out
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

/// Current session, provided by `SessionProvider` at the application root.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_decides_state() {
        assert_eq!(
            SessionState::from_token(Some("abc.def")),
            SessionState::Authenticated
        );
        assert_eq!(SessionState::from_token(None), SessionState::Anonymous);
        assert_eq!(SessionState::from_token(Some("")), SessionState::Anonymous);
        assert_eq!(SessionState::from_token(Some("   ")), SessionState::Anonymous);
    }

    #[test]
    fn auth_required_visibility() {
        assert!(!SessionState::Authenticated.hides_auth_required());
        assert!(SessionState::Anonymous.hides_auth_required());
    }
}
