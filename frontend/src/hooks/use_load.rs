//! Hook driving one render target through its load lifecycle.

use crate::lifecycle::{spawn_load, LoadState};
use std::future::Future;
use yew::prelude::*;

/// Run `load` whenever `deps` change and expose the target's state.
///
/// The state shows `Loading` while the call is in flight. When the
/// component unmounts or `deps` change first, the pending call is aborted
/// and its result is never written.
///
/// # Example
/// ```ignore
/// let popular = use_load((), move |_| async move { controller.load_popular().await });
/// match &*popular {
///     LoadState::Rendered(movies) => { /* render grid */ }
///     _ => { /* spinner or fallback */ }
/// }
/// ```
#[hook]
pub fn use_load<T, D, F, Fut>(deps: D, load: F) -> UseStateHandle<LoadState<T>>
where
    T: 'static,
    D: PartialEq + 'static,
    F: FnOnce(&D) -> Fut + 'static,
    Fut: Future<Output = LoadState<T>> + 'static,
{
    let state = use_state(LoadState::<T>::default);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            state.set(LoadState::Loading);
            let handle = spawn_load(load(deps), move |outcome| state.set(outcome));
            move || drop(handle)
        });
    }

    state
}
