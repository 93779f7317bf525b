use crate::components::use_toast;
use crate::hooks::use_api;
use crate::watch_action::{WatchAction, WatchState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchButtonProps {
    pub movie_id: i64,
}

/// Records the movie in the user's watch history.
///
/// Parents key this by movie id so a new movie always starts `Ready`.
#[function_component(WatchButton)]
pub fn watch_button(props: &WatchButtonProps) -> Html {
    let api = use_api();
    let toast = use_toast();
    let action = use_mut_ref(|| WatchAction::new(props.movie_id));
    let state = use_state(|| WatchState::Ready);

    let onclick = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(request) = WatchAction::activate(&action, api.clone()) else {
                return;
            };
            state.set(WatchState::Pending);

            let action = action.clone();
            let state = state.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let notification = request.await;
                state.set(action.borrow().state());
                toast.emit(notification);
            });
        })
    };

    let class = if *state == WatchState::Watched {
        "btn btn-success btn-sm"
    } else {
        "btn btn-outline-success btn-sm"
    };

    html! {
        <button {class} disabled={state.is_disabled()} {onclick}>
            { state.label() }
        </button>
    }
}
