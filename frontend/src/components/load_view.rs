//! Loading, error and empty-state fragments shared by every render target.

use crate::lifecycle::{LoadState, Target};
use crate::view_model::Listing;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner" role="status"></div>
            if let Some(label) = &props.label {
                <p>{ label }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub message: AttrValue,
}

/// Inline fallback for a failed target
#[function_component(ErrorAlert)]
pub fn error_alert(props: &MessageProps) -> Html {
    html! {
        <div class="alert alert-danger" role="alert">{ &props.message }</div>
    }
}

/// Notice for a target that loaded fine but has nothing to show
#[function_component(EmptyNotice)]
pub fn empty_notice(props: &MessageProps) -> Html {
    html! {
        <div class="empty-state">
            <p>{ &props.message }</p>
        </div>
    }
}

/// Render one target: spinner while pending, exactly one fallback on error,
/// `render` once loaded.
pub fn render_load<T>(target: Target, state: &LoadState<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match state {
        LoadState::Idle | LoadState::Loading => {
            html! { <Spinner label={AttrValue::from(target.loading_label())} /> }
        }
        LoadState::Rendered(value) => render(value),
        LoadState::Errored(err) => html! { <ErrorAlert message={err.fallback_message()} /> },
    }
}

pub fn render_listing<T>(listing: &Listing<T>, render_items: impl FnOnce(&[T]) -> Html) -> Html {
    match listing {
        Listing::Items(items) => render_items(items),
        Listing::Empty(message) => html! { <EmptyNotice message={*message} /> },
    }
}
