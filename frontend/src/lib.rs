mod api;
mod auth_gate;
mod components;
mod controllers;
mod hooks;
mod lifecycle;
mod pages;
mod session;
mod session_sync;
pub mod utils;
mod view_model;
mod watch_action;

#[cfg(test)]
mod testing;

use auth_gate::AuthGate;
use components::{Navbar, ToastProvider};
use pages::{
    genre::GenrePage, home::HomePage, landing::LandingPage, movie::MoviePage,
    not_found::NotFoundPage, search::SearchPage, space::SpacePage,
};
use session_sync::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/home")]
    Home,
    #[at("/movie")]
    Movie,
    #[at("/space")]
    Space,
    #[at("/search")]
    Search,
    #[at("/genre")]
    Genre,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page anonymous visitors are sent to
    pub fn is_entry(&self) -> bool {
        matches!(self, Route::Landing)
    }
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Landing => return html! { <LandingPage /> },
        Route::Home => html! { <HomePage /> },
        Route::Movie => html! { <MoviePage /> },
        Route::Space => html! { <SpacePage /> },
        Route::Search => html! { <SearchPage /> },
        Route::Genre => html! { <GenrePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            <Navbar />
            <main>{ page }</main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <AuthGate>
                        <Switch<Route> render={switch} />
                    </AuthGate>
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
