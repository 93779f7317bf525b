//! Top navigation: brand, search box, and the session-dependent links.

use crate::components::{AuthRequired, AuthTag};
use crate::controllers::SearchQuery;
use crate::session::use_session;
use crate::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let search_text = use_state(String::new);

    let on_search_input = {
        let search_text = search_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_text.set(input.value());
        })
    };

    let on_search = {
        let navigator = navigator.clone();
        let search_text = search_text.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(query) = SearchQuery::from_input(&search_text) else {
                return;
            };
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&Route::Search, &query) {
                    log::error!("Failed to open search results: {:?}", err);
                }
            }
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    html! {
        <nav class="navbar navbar-expand navbar-dark bg-dark">
            <div class="container">
                <Link<Route> to={Route::Home} classes="navbar-brand">{ "Movie Recommender" }</Link<Route>>
                <form class="d-flex search-form" role="search" onsubmit={on_search}>
                    <input
                        class="form-control me-2"
                        type="search"
                        placeholder="Search movies..."
                        value={(*search_text).clone()}
                        oninput={on_search_input}
                    />
                    <button class="btn btn-outline-light" type="submit">{ "Search" }</button>
                </form>
                <ul class="navbar-nav ms-auto">
                    <li class="nav-item">
                        <Link<Route> to={Route::Home} classes="nav-link">{ "Home" }</Link<Route>>
                    </li>
                    <AuthRequired tag={AuthTag::Li} class="nav-item">
                        <Link<Route> to={Route::Space} classes="nav-link">{ "Your Space" }</Link<Route>>
                    </AuthRequired>
                    <AuthRequired tag={AuthTag::Li} class="nav-item">
                        <a href="#" class="nav-link" onclick={on_logout}>{ "Logout" }</a>
                    </AuthRequired>
                    if !session.is_authenticated() {
                        <li class="nav-item">
                            <Link<Route> to={Route::Landing} classes="nav-link">{ "Sign in" }</Link<Route>>
                        </li>
                    }
                </ul>
            </div>
        </nav>
    }
}
