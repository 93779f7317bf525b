use shared::ApiClientConfig;
use web_sys::window;

/// Compile-time override for the catalog origin (e.g. when the API is not
/// served from the same host as the static files)
const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("MOVIE_API_BASE_URL");

/// Get the base HTTP URL (e.g., "http://localhost:8000" or "https://movies.example")
pub fn get_base_url() -> String {
    if let Some(base) = API_BASE_URL_OVERRIDE.filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// Client configuration for the current session
pub fn api_config(token: Option<&str>) -> ApiClientConfig {
    with_token(ApiClientConfig::new(get_base_url()), token)
}

fn with_token(config: ApiClientConfig, token: Option<&str>) -> ApiClientConfig {
    match token.filter(|t| !t.trim().is_empty()) {
        Some(token) => config.with_token(token),
        None => config,
    }
}
