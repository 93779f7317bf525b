//! Movie detail page: the movie itself, then movies like it.

use crate::components::{render_listing, render_load, ErrorAlert, MovieDetailPanel, MovieGrid};
use crate::controllers::{DetailController, MovieQuery, SimilarTrigger};
use crate::hooks::{use_api, use_load};
use crate::lifecycle::Target;
use crate::session::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(MoviePage)]
pub fn movie_page() -> Html {
    let api = use_api();
    let session = use_session();
    let raw_id = use_location()
        .and_then(|location| location.query::<MovieQuery>().ok())
        .and_then(|query| query.id);

    match DetailController::init(api, session.state, raw_id.as_deref()) {
        // Keyed so another movie starts from a fresh lifecycle
        Ok(controller) => html! {
            <MovieDetailBody key={controller.movie_id()} movie_id={controller.movie_id()} />
        },
        Err(err) => html! {
            <div class="container py-4">
                <ErrorAlert message={err.fallback_message()} />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct MovieDetailBodyProps {
    movie_id: i64,
}

#[function_component(MovieDetailBody)]
fn movie_detail_body(props: &MovieDetailBodyProps) -> Html {
    let api = use_api();
    let session = use_session();
    let controller = DetailController::for_movie(api, session.state, props.movie_id);

    let primary = {
        let controller = controller.clone();
        use_load((), move |_| async move { controller.load_primary().await })
    };

    // Restarts when the primary settles and again when the session flips
    let similar = {
        let controller = controller.clone();
        use_load(
            SimilarTrigger::new(&*primary, session.state),
            move |trigger| {
                let trigger = *trigger;
                async move { controller.similar_load(trigger).await }
            },
        )
    };

    html! {
        <div class="container py-4">
            { render_load(
                Target::MovieDetails,
                &primary.map(|movie| controller.detail(movie)),
                |detail| html! { <MovieDetailPanel detail={detail.clone()} /> },
            ) }
            <section class="mt-5">
                <h3 class="mb-3">{ "Similar Movies" }</h3>
                { render_load(
                    Target::SimilarMovies,
                    &similar.map(|movies| controller.similar(movies)),
                    |listing| render_listing(listing, |cards| html! {
                        <MovieGrid cards={cards.to_vec()} />
                    }),
                ) }
            </section>
        </div>
    }
}
