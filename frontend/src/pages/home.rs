use crate::components::{render_load, MovieGrid};
use crate::controllers::{GenreQuery, HomeController};
use crate::hooks::{use_api, use_load};
use crate::lifecycle::Target;
use crate::session::use_session;
use crate::view_model::GenreTileModel;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_api();
    let session = use_session();
    let controller = HomeController::new(api, session.state);

    // Independent targets: each settles on its own
    let popular = {
        let controller = controller.clone();
        use_load((), move |_| async move { controller.load_popular().await })
    };
    let genres = {
        let controller = controller.clone();
        use_load((), move |_| async move { controller.load_genres().await })
    };

    html! {
        <div class="container py-4">
            <section class="mb-5">
                <h2 class="mb-3">{ "Popular Movies" }</h2>
                { render_load(
                    Target::PopularMovies,
                    &popular.map(|movies| controller.popular_grid(movies)),
                    |cards| html! { <MovieGrid cards={cards.clone()} /> },
                ) }
            </section>
            <section>
                <h2 class="mb-3">{ "Browse by Genre" }</h2>
                { render_load(
                    Target::Genres,
                    &genres.map(|genres| controller.genre_tiles(genres)),
                    |tiles| html! {
                        <div class="genre-tiles">
                            { for tiles.iter().map(|tile| html! {
                                <GenreTile key={tile.id} tile={tile.clone()} />
                            }) }
                        </div>
                    },
                ) }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GenreTileProps {
    tile: GenreTileModel,
}

#[function_component(GenreTile)]
fn genre_tile(props: &GenreTileProps) -> Html {
    html! {
        <Link<Route, GenreQuery>
            to={Route::Genre}
            query={Some(GenreQuery::from(&props.tile))}
            classes="genre-tile btn btn-outline-secondary"
        >
            { &props.tile.name }
        </Link<Route, GenreQuery>>
    }
}
