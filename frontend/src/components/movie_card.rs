//! Cards for movie grids and the watch history.

use crate::components::WatchButton;
use crate::controllers::MovieQuery;
use crate::view_model::{HistoryCardModel, MovieCardModel};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PosterProps {
    pub src: AttrValue,
    pub fallback: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Poster image that swaps to the placeholder once if the real one fails.
#[function_component(Poster)]
pub fn poster(props: &PosterProps) -> Html {
    let failed = use_state(|| false);

    // A new poster gets a fresh attempt
    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
        });
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let src = if *failed {
        props.fallback.clone()
    } else {
        props.src.clone()
    };

    html! {
        <img {src} alt={props.alt.clone()} class={props.class.clone()} loading="lazy" {onerror} />
    }
}

#[derive(Properties, PartialEq)]
pub struct MovieCardProps {
    pub card: MovieCardModel,
}

#[function_component(MovieCard)]
pub fn movie_card(props: &MovieCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="col-6 col-md-4 col-lg-3">
            <div class="card movie-card h-100">
                <Poster
                    src={card.poster_url.clone()}
                    fallback={card.fallback_url.clone()}
                    alt={card.title.clone()}
                    class="card-img-top"
                />
                <div class="card-body">
                    <h5 class="card-title">{ &card.title }</h5>
                    <p class="card-text">
                        <small class="text-muted">{ &card.year }</small>
                        <span class="rating">{ format!("★ {}", card.rating) }</span>
                    </p>
                </div>
                <div class="card-footer">
                    <Link<Route, MovieQuery>
                        to={Route::Movie}
                        query={Some(MovieQuery::new(card.detail_id))}
                        classes="btn btn-primary btn-sm"
                    >
                        { "View Details" }
                    </Link<Route, MovieQuery>>
                    if let Some(watch) = card.watch {
                        <WatchButton key={watch.movie_id} movie_id={watch.movie_id} />
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MovieGridProps {
    pub cards: Vec<MovieCardModel>,
}

#[function_component(MovieGrid)]
pub fn movie_grid(props: &MovieGridProps) -> Html {
    html! {
        <div class="row g-4">
            { for props.cards.iter().map(|card| html! {
                <MovieCard key={card.key} card={card.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryCardProps {
    pub card: HistoryCardModel,
}

#[function_component(HistoryCard)]
pub fn history_card(props: &HistoryCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="col-6 col-md-4 col-lg-3">
            <div class="card history-card h-100">
                <Poster
                    src={card.poster_url.clone()}
                    fallback={card.fallback_url.clone()}
                    alt={card.title.clone()}
                    class="card-img-top"
                />
                <div class="card-body">
                    <h5 class="card-title">{ &card.title }</h5>
                    <p class="card-text">
                        <small class="text-muted">{ format!("Watched on {}", card.watched_on) }</small>
                    </p>
                    <Link<Route, MovieQuery>
                        to={Route::Movie}
                        query={Some(MovieQuery::new(card.detail_id))}
                        classes="btn btn-outline-primary btn-sm"
                    >
                        { "View Details" }
                    </Link<Route, MovieQuery>>
                </div>
            </div>
        </div>
    }
}
