//! Entry page with the sign-in form.

use crate::hooks::use_api;
use crate::session::use_session;
use crate::Route;
use shared::{ApiError, LoginRequest, MovieApi};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Inline text for a rejected sign-in
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Auth(_) => "Invalid email or password.",
        ApiError::Network(_) => "Could not reach the server. Please try again.",
        _ => "Sign in failed. Please try again.",
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Enter your email and password."));
                return;
            }
            submitting.set(true);
            error.set(None);

            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let api = api.clone();
            let login = session.login.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match api.login(request).await {
                    Ok(token) => {
                        login.emit(token.access_token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::error!("Sign in failed: {}", err);
                        error.set(Some(login_error_message(&err)));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="landing-container">
            <div class="landing-content">
                <div class="landing-header">
                    <h1>{ "Movie Recommender" }</h1>
                    <p class="tagline">
                        { "Track what you watch and discover what to watch next" }
                    </p>
                </div>

                <form class="login-form card" onsubmit={on_submit}>
                    <div class="card-body">
                        <h2 class="h5">{ "Sign in" }</h2>
                        if let Some(message) = *error {
                            <div class="alert alert-danger" role="alert">{ message }</div>
                        }
                        <div class="mb-3">
                            <label class="form-label" for="email">{ "Email" }</label>
                            <input
                                id="email"
                                class="form-control"
                                type="email"
                                autocomplete="username"
                                value={(*email).clone()}
                                oninput={on_email}
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="password">{ "Password" }</label>
                            <input
                                id="password"
                                class="form-control"
                                type="password"
                                autocomplete="current-password"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                        </div>
                        <button class="btn btn-primary w-100" type="submit" disabled={*submitting}>
                            { if *submitting { "Signing in..." } else { "Sign in" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
