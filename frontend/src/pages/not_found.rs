use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container py-5 text-center">
            <h1>{ "Page not found" }</h1>
            <p class="text-muted">{ "The page you were looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to movies" }</Link<Route>>
        </div>
    }
}
