//! Route-level session gate.
//!
//! Every route change is checked against the session: anonymous visitors are
//! sent to the landing page, signed-in users are sent past it. The redirect
//! fades the page out first; navigation is tied to a guard so it happens
//! even if the fade never completes.

use crate::session::{use_session, SessionState};
use crate::Route;
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

/// Length of the fade before a redirect, in milliseconds
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub enum GateAction {
    None,
    RedirectTo(Route),
}

/// Decide whether `current` may be shown for `session`.
pub fn evaluate(current: &Route, session: SessionState) -> GateAction {
    match (current.is_entry(), session) {
        (false, SessionState::Anonymous) => GateAction::RedirectTo(Route::Landing),
        (true, SessionState::Authenticated) => GateAction::RedirectTo(Route::Home),
        _ => GateAction::None,
    }
}

/// Session as it was when the current page was entered.
///
/// Pages are told apart by path and query, so `/movie?id=1` to `/movie?id=2`
/// is a new page even though the route is the same.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSnapshot {
    page: Option<String>,
    session: SessionState,
}

impl Default for GateSnapshot {
    fn default() -> Self {
        Self {
            page: None,
            session: SessionState::Anonymous,
        }
    }
}

impl GateSnapshot {
    /// Session to gate `page` with. Refreshed only when the page changes.
    pub fn observe(&mut self, page: &str, session: SessionState) -> SessionState {
        if self.page.as_deref() != Some(page) {
            self.page = Some(page.to_string());
            self.session = session;
        }
        self.session
    }
}

pub fn page_key(path: &str, query: &str) -> String {
    format!("{}{}", path, query)
}

/// How a redirect is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Navigate right away (headless contexts, tests)
    Immediate,
    /// Dim the page for `millis` first
    Fade { millis: u32 },
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Fade { millis: FADE_MS }
    }
}

/// Interaction is suppressed while this guard lives; dropping it navigates
/// exactly once and then lifts the suppression.
pub struct RedirectGuard {
    navigate: Option<Box<dyn FnOnce()>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl RedirectGuard {
    pub fn new(navigate: impl FnOnce() + 'static) -> Self {
        Self {
            navigate: Some(Box::new(navigate)),
            release: None,
        }
    }

    pub fn with_release(mut self, release: impl FnOnce() + 'static) -> Self {
        self.release = Some(Box::new(release));
        self
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        if let Some(navigate) = self.navigate.take() {
            navigate();
        }
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Start a redirect. The returned timer owns the guard: whether it fires or
/// is dropped early, navigation happens.
pub fn schedule_redirect(
    transition: Transition,
    navigate: impl FnOnce() + 'static,
) -> Option<Timeout> {
    match transition {
        Transition::Immediate => {
            drop(RedirectGuard::new(navigate));
            None
        }
        Transition::Fade { millis } => {
            let guard = RedirectGuard::new(navigate).with_release(dim_page());
            Some(Timeout::new(millis, move || drop(guard)))
        }
    }
}

/// Fade the body out and block pointer input. Returns the undo step.
fn dim_page() -> impl FnOnce() {
    let body = gloo::utils::document().body();
    if let Some(body) = &body {
        let style = body.style();
        let _ = style.set_property("transition", &format!("opacity {}ms ease", FADE_MS));
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("pointer-events", "none");
    }
    move || {
        if let Some(body) = body {
            let style = body.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.remove_property("pointer-events");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub children: Children,
}

/// Wraps the router switch. Children render only when no redirect is due.
#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let page = use_location()
        .map(|location| page_key(location.path(), location.query_str()))
        .unwrap_or_default();
    let session = use_session();
    let snapshot = use_mut_ref(GateSnapshot::default);

    // Cross-tab changes don't bounce the page being viewed; the next page sees them
    let seen = snapshot.borrow_mut().observe(&page, session.state);
    let action = evaluate(&route, seen);

    {
        let action = action.clone();
        use_effect_with(action, move |action| {
            let timer = match (action.clone(), navigator) {
                (GateAction::RedirectTo(target), Some(navigator)) => {
                    log::info!("Redirecting to {:?}", target);
                    schedule_redirect(Transition::default(), move || navigator.push(&target))
                }
                _ => None,
            };
            move || drop(timer)
        });
    }

    match action {
        GateAction::None => html! { <>{ props.children.clone() }</> },
        GateAction::RedirectTo(_) => html! { <div class="auth-gate-pending"></div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn entry_page_redirects_signed_in_users() {
        assert_eq!(
            evaluate(&Route::Landing, SessionState::Authenticated),
            GateAction::RedirectTo(Route::Home)
        );
        assert_eq!(
            evaluate(&Route::Landing, SessionState::Anonymous),
            GateAction::None
        );
    }

    #[test]
    fn other_pages_require_a_session() {
        for route in [Route::Home, Route::Movie, Route::Space, Route::Search, Route::Genre] {
            assert_eq!(
                evaluate(&route, SessionState::Anonymous),
                GateAction::RedirectTo(Route::Landing)
            );
            assert_eq!(evaluate(&route, SessionState::Authenticated), GateAction::None);
        }
    }

    #[test]
    fn immediate_redirect_navigates_without_a_timer() {
        let navigated = Rc::new(Cell::new(0));
        let counter = navigated.clone();
        let timer = schedule_redirect(Transition::Immediate, move || {
            counter.set(counter.get() + 1)
        });
        assert!(timer.is_none());
        assert_eq!(navigated.get(), 1);
    }

    #[test]
    fn guard_navigates_once_then_releases() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let nav_log = order.clone();
        let release_log = order.clone();
        let guard = RedirectGuard::new(move || nav_log.borrow_mut().push("navigate"))
            .with_release(move || release_log.borrow_mut().push("release"));
        assert!(order.borrow().is_empty());
        drop(guard);
        assert_eq!(*order.borrow(), vec!["navigate", "release"]);
    }

    #[test]
    fn default_transition_is_the_short_fade() {
        assert_eq!(Transition::default(), Transition::Fade { millis: 300 });
    }

    #[test]
    fn same_route_with_new_query_is_a_new_page() {
        let mut snapshot = GateSnapshot::default();
        let first = page_key("/movie", "?id=1");
        assert_eq!(
            snapshot.observe(&first, SessionState::Authenticated),
            SessionState::Authenticated
        );

        // Signed out in another tab: the open page keeps its snapshot
        let seen = snapshot.observe(&first, SessionState::Anonymous);
        assert_eq!(evaluate(&Route::Movie, seen), GateAction::None);

        // Following a similar-movie link re-evaluates with the new session
        let second = page_key("/movie", "?id=2");
        let seen = snapshot.observe(&second, SessionState::Anonymous);
        assert_eq!(
            evaluate(&Route::Movie, seen),
            GateAction::RedirectTo(Route::Landing)
        );
    }

    #[test]
    fn new_search_is_a_new_page() {
        let mut snapshot = GateSnapshot::default();
        snapshot.observe(&page_key("/search", "?q=alien"), SessionState::Authenticated);
        let seen = snapshot.observe(&page_key("/search", "?q=heat"), SessionState::Anonymous);
        assert_eq!(seen, SessionState::Anonymous);
    }
}
