//! "Mark as watched" interaction.
//!
//! The control disables itself before the request goes out, which is the
//! only guard against double submission. Success locks it for the rest of
//! the page's life; failure re-enables it so the user can retry.

use crate::lifecycle::ViewError;
use shared::{ApiError, MovieApi};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Ready,
    Pending,
    Watched,
}

impl WatchState {
    pub fn label(self) -> &'static str {
        match self {
            WatchState::Ready => "Mark as Watched",
            WatchState::Pending => "Saving...",
            WatchState::Watched => "Watched",
        }
    }

    pub fn is_disabled(self) -> bool {
        self != WatchState::Ready
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-success",
            NotificationKind::Danger => "bg-danger",
        }
    }
}

/// Transient message shown in the toast stack
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Danger,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchAction {
    movie_id: i64,
    state: WatchState,
}

impl WatchAction {
    pub fn new(movie_id: i64) -> Self {
        Self {
            movie_id,
            state: WatchState::Ready,
        }
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Disable the control. Returns false when it is already busy or done.
    pub fn begin(&mut self) -> bool {
        if self.state != WatchState::Ready {
            return false;
        }
        self.state = WatchState::Pending;
        true
    }

    /// Apply the outcome of the request started by `begin`.
    pub fn settle(&mut self, outcome: Result<(), ApiError>) -> Notification {
        match outcome {
            Ok(()) => {
                self.state = WatchState::Watched;
                Notification::success("Added to watch history!")
            }
            Err(source) => {
                let err = ViewError::ActionFailure { source };
                log::error!("Failed to mark movie {} as watched: {}", self.movie_id, err);
                self.state = WatchState::Ready;
                Notification::danger("Error adding to watch history")
            }
        }
    }

    /// Disable the control now and return the request that settles it.
    /// `None` means the control was not ready and nothing was sent.
    ///
    /// The action is shared with the button that renders it, so no borrow is
    /// held while the request is in flight.
    pub fn activate<A: MovieApi + 'static>(
        action: &Rc<RefCell<WatchAction>>,
        api: Rc<A>,
    ) -> Option<impl Future<Output = Notification>> {
        if !action.borrow_mut().begin() {
            return None;
        }
        let action = action.clone();
        Some(async move {
            let movie_id = action.borrow().movie_id;
            let outcome = api.add_to_watch_history(movie_id).await;
            action.borrow_mut().settle(outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failure, StubApi};
    use futures::executor::block_on;

    fn shared(movie_id: i64) -> Rc<RefCell<WatchAction>> {
        Rc::new(RefCell::new(WatchAction::new(movie_id)))
    }

    #[test]
    fn success_locks_the_control() {
        let api = Rc::new(StubApi::default());
        let action = shared(42);

        let request = WatchAction::activate(&action, api.clone()).expect("first activation runs");
        assert_eq!(action.borrow().state(), WatchState::Pending);
        let note = block_on(request);
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(action.borrow().state(), WatchState::Watched);
        assert_eq!(action.borrow().state().label(), "Watched");
        assert!(action.borrow().state().is_disabled());

        assert!(WatchAction::activate(&action, api.clone()).is_none());
        assert_eq!(api.calls(), vec!["add_to_watch_history(42)"]);
    }

    #[test]
    fn failure_re_enables_for_retry() {
        let api = Rc::new(StubApi {
            watch: Err(failure()),
            ..StubApi::default()
        });
        let action = shared(7);

        let note = block_on(WatchAction::activate(&action, api.clone()).expect("activation runs"));
        assert_eq!(note, Notification::danger("Error adding to watch history"));
        assert_eq!(action.borrow().state(), WatchState::Ready);
        assert!(!action.borrow().state().is_disabled());

        assert!(WatchAction::activate(&action, api.clone()).is_some());
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn second_click_while_pending_sends_nothing() {
        let api = Rc::new(StubApi::default());
        let action = shared(3);

        let first = WatchAction::activate(&action, api.clone()).expect("first click runs");
        assert!(WatchAction::activate(&action, api.clone()).is_none());
        block_on(first);
        assert_eq!(api.calls(), vec!["add_to_watch_history(3)"]);
    }

    #[test]
    fn pending_control_ignores_repeat_clicks() {
        let mut action = WatchAction::new(1);
        assert!(action.begin());
        assert_eq!(action.state(), WatchState::Pending);
        assert!(!action.begin());
        assert_eq!(action.state().label(), "Saving...");
    }
}
