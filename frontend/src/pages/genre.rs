use crate::components::{render_listing, render_load, ErrorAlert, MovieGrid};
use crate::controllers::{GenreController, GenreQuery};
use crate::hooks::{use_api, use_load};
use crate::lifecycle::{LoadState, Target};
use crate::session::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(GenrePage)]
pub fn genre_page() -> Html {
    let api = use_api();
    let session = use_session();
    let query = use_location()
        .and_then(|location| location.query::<GenreQuery>().ok())
        .unwrap_or_default();

    let controller = GenreController::init(api, session.state, &query);

    let movies = {
        let controller = controller.clone();
        use_load(query.id.clone(), move |_| async move {
            match controller {
                Ok(controller) => controller.load_movies().await,
                Err(err) => LoadState::Errored(err),
            }
        })
    };

    match controller {
        Ok(controller) => html! {
            <div class="container py-4">
                <h2 class="mb-3">{ controller.heading() }</h2>
                { render_load(
                    Target::GenreMovies,
                    &movies.map(|movies| controller.movies(movies)),
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
