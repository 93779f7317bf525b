//! Cross-tab session synchronization.
//!
//! Another tab signing in or out rewrites the shared token. The browser
//! reports that through the window `storage` event. `SessionSync` decides
//! whether signed-in/signed-out actually flipped, and `SessionProvider`
//! publishes a new state only on that answer. A rotated token reaches the
//! API client without a state change.

use crate::session::{clear_token, load_token, save_token, SessionContext, SessionState};
use gloo::events::EventListener;
use shared::protocol::TOKEN_STORAGE_KEY;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::prelude::*;

/// Last known session value, compared against storage notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSync {
    current: SessionState,
}

impl SessionSync {
    pub fn new(initial: SessionState) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SessionState {
        self.current
    }

    /// A `None` key means the other tab cleared all of storage.
    pub fn is_token_key(key: Option<&str>) -> bool {
        key.map_or(true, |k| k == TOKEN_STORAGE_KEY)
    }

    /// Feed one storage notification. Returns the new state when it flipped.
    pub fn observe(&mut self, key: Option<&str>, new_value: Option<&str>) -> Option<SessionState> {
        if !Self::is_token_key(key) {
            return None;
        }
        self.set(SessionState::from_token(new_value))
    }

    /// Record a local sign-in/sign-out. Returns the new state when it flipped.
    pub fn set(&mut self, next: SessionState) -> Option<SessionState> {
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the token, listens for changes from other tabs, and provides
/// `SessionContext` to everything below it.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let token = use_state(load_token);
    let sync = use_mut_ref(|| SessionSync::new(SessionState::from_token(token.as_deref())));
    // Published state; written only when `SessionSync` reports a flip
    let state = use_state(|| sync.borrow().current());

    {
        let token = token.clone();
        let state = state.clone();
        let sync = sync.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "storage", move |event| {
                let Some(event) = event.dyn_ref::<StorageEvent>() else {
                    return;
                };
                let key = event.key();
                if !SessionSync::is_token_key(key.as_deref()) {
                    return;
                }
                let new_value = event.new_value().filter(|v| !v.trim().is_empty());
                let flipped = sync
                    .borrow_mut()
                    .observe(key.as_deref(), new_value.as_deref());
                if let Some(next) = flipped {
                    log::info!("Session changed in another tab: {:?}", next);
                    state.set(next);
                }
                // A rotated token keeps the state but must still reach the API client
                token.set(new_value);
            });
            move || drop(listener)
        });
    }

    let login = {
        let token = token.clone();
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |new_token: String| {
            save_token(&new_token);
            if let Some(next) = sync.borrow_mut().set(SessionState::Authenticated) {
                log::info!("Signed in");
                state.set(next);
            }
            token.set(Some(new_token));
        })
    };

    let logout = {
        let token = token.clone();
        let state = state.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            clear_token();
            if let Some(next) = sync.borrow_mut().set(SessionState::Anonymous) {
                log::info!("Signed out");
                state.set(next);
            }
            token.set(None);
        })
    };

    let context = SessionContext {
        state: *state,
        token: (*token).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}
