use crate::components::{render_listing, render_load, ErrorAlert, MovieGrid};
use crate::controllers::{SearchController, SearchQuery};
use crate::hooks::{use_api, use_load};
use crate::lifecycle::{LoadState, Target};
use crate::session::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let api = use_api();
    let session = use_session();
    let raw_query = use_location()
        .and_then(|location| location.query::<SearchQuery>().ok())
        .and_then(|query| query.q);

    let controller = SearchController::init(api, session.state, raw_query.as_deref());

    // A new search from the navbar changes the query and restarts the load
    let results = {
        let controller = controller.clone();
        use_load(raw_query, move |_| async move {
            match controller {
                Ok(controller) => controller.load_results().await,
                Err(err) => LoadState::Errored(err),
            }
        })
    };

    match controller {
        Ok(controller) => html! {
            <div class="container py-4">
                <h2 class="mb-3">{ controller.heading() }</h2>
                { render_load(
                    Target::SearchResults,
                    &results.map(|movies| controller.results(movies)),
                    |listing| render_listing(listing, |cards| html! {
                        <MovieGrid cards={cards.to_vec()} />
                    }),
                ) }
            </div>
        },
        Err(err) => html! {
            <div class="container py-4">
                <ErrorAlert message={err.fallback_message()} />
            </div>
        },
    }
}
