//! Transient notifications.
//!
//! `ToastProvider` owns a small queue; anything below it can push a
//! `Notification` through `use_toast()`. Each toast dismisses itself.

use crate::watch_action::Notification;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// How long a toast stays on screen, in milliseconds
pub const TOAST_DISMISS_MS: u32 = 3_000;

/// Oldest toasts are dropped beyond this
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<(u32, Notification)>,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                next.toasts.push((next.next_id, notification));
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > MAX_TOASTS {
                    let overflow = next.toasts.len() - MAX_TOASTS;
                    next.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|(toast_id, _)| *toast_id != id),
        }
        Rc::new(next)
    }
}

/// Push a notification onto the page's toast stack
#[hook]
pub fn use_toast() -> Callback<Notification> {
    use_context::<Callback<Notification>>().unwrap_or_else(|| {
        Callback::from(|n: Notification| log::warn!("No toast stack for: {}", n.message))
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let push = {
        let queue = queue.dispatcher();
        Callback::from(move |n: Notification| queue.dispatch(ToastAction::Push(n)))
    };

    let on_dismiss = {
        let queue = queue.dispatcher();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Callback<Notification>> context={push}>
            { props.children.clone() }
            <div class="toast-container">
                {
                    queue.toasts.iter().map(|(id, notification)| {
                        html! {
                            <Toast
                                key={*id}
                                id={*id}
                                notification={notification.clone()}
                                on_dismiss={on_dismiss.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </ContextProvider<Callback<Notification>>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u32,
    notification: Notification,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.notification.kind.css_class())} role="status">
            <span class="toast-body">{ &props.notification.message }</span>
            <button class="toast-close" onclick={close} title="Dismiss">{ "×" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(Notification::success(message)))
    }

    #[test]
    fn push_and_dismiss() {
        let queue = push(Rc::new(ToastQueue::default()), "one");
        let queue = push(queue, "two");
        assert_eq!(queue.toasts.len(), 2);

        let first_id = queue.toasts[0].0;
        let queue = queue.reduce(ToastAction::Dismiss(first_id));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].1.message, "two");
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 0..6 {
            queue = push(queue, &format!("toast {}", i));
        }
        assert_eq!(queue.toasts.len(), MAX_TOASTS);
        assert_eq!(queue.toasts[0].1.message, "toast 2");
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let queue = push(Rc::new(ToastQueue::default()), "one");
        let queue = queue.reduce(ToastAction::Dismiss(99));
        assert_eq!(queue.toasts.len(), 1);
    }
}
