use crate::components::{render_listing, render_load, HistoryCard, MovieGrid};
use crate::controllers::SpaceController;
use crate::hooks::{use_api, use_load};
use crate::lifecycle::Target;
use crate::session::use_session;
use yew::prelude::*;

/// The signed-in user's watch history and recommendations.
#[function_component(SpacePage)]
pub fn space_page() -> Html {
    let api = use_api();
    let session = use_session();
    let controller = SpaceController::new(api, session.state);

    let history = {
        let controller = controller.clone();
        use_load((), move |_| async move { controller.load_history().await })
    };
    let recommendations = {
        let controller = controller.clone();
        use_load((), move |_| async move { controller.load_recommendations().await })
    };

    html! {
        <div class="container py-4">
            <section class="mb-5">
                <h2 class="mb-3">{ "Watch History" }</h2>
                { render_load(
                    Target::WatchHistory,
                    &history.map(|entries| controller.history(entries)),
                    |listing| render_listing(listing, |cards| html! {
                        <div class="row g-4">
                            { for cards.iter().map(|card| html! {
                                <HistoryCard key={card.key.clone()} card={card.clone()} />
                            }) }
                        </div>
                    }),
                ) }
            </section>
            <section>
                <h2 class="mb-3">{ "Recommended for You" }</h2>
                { render_load(
                    Target::Recommendations,
                    &recommendations.map(|movies| controller.recommendations(movies)),
                    |listing| render_listing(listing, |cards| html! {
                        <MovieGrid cards={cards.to_vec()} />
                    }),
                ) }
            </section>
        </div>
    }
}
