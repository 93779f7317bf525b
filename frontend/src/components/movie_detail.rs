use crate::components::movie_card::Poster;
use crate::components::WatchButton;
use crate::view_model::MovieDetailModel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MovieDetailPanelProps {
    pub detail: MovieDetailModel,
}

#[function_component(MovieDetailPanel)]
pub fn movie_detail_panel(props: &MovieDetailPanelProps) -> Html {
    let detail = &props.detail;

    html! {
        <div class="row movie-detail">
            <div class="col-md-4">
                <Poster
                    src={detail.poster_url.clone()}
                    fallback={detail.fallback_url.clone()}
                    alt={detail.title.clone()}
                    class="img-fluid rounded"
                />
            </div>
            <div class="col-md-8">
                <h1>{ &detail.title }</h1>
                <p class="text-muted movie-meta">{ &detail.meta }</p>
                <div class="genre-badges">
                    { for detail.genres.iter().map(|name| html! {
                        <span class="badge bg-secondary me-1">{ name }</span>
                    }) }
                </div>
                <p class="overview">{ &detail.overview }</p>
                if let Some(watch) = detail.watch {
                    <WatchButton key={watch.movie_id} movie_id={watch.movie_id} />
                }
            </div>
        </div>
    }
}
