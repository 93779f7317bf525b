//! API client types and trait definitions
//!
//! This module defines the catalog API contract that can be implemented
//! by both native and WASM (gloo-net) HTTP clients.

use serde::{Deserialize, Serialize};

use crate::protocol::{IMAGE_BASE_URL, PLACEHOLDER_IMAGE};

// Re-export types from parent module for convenience
pub use crate::{
    GenreListResponse, LoginRequest, Movie, MovieListResponse, TokenResponse, WatchHistoryEntry,
};

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth(String),
    /// Resource not found
    NotFound(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ApiError::Auth(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// API endpoint definitions
pub mod endpoints {
    pub const POPULAR_MOVIES: &str = "/api/movies/popular";
    pub const GENRES: &str = "/api/movies/genres";
    pub const SEARCH: &str = "/api/movies/search";
    pub const WATCH_HISTORY: &str = "/api/users/me/history";
    pub const RECOMMENDATIONS: &str = "/api/recommendations/personalized";
    pub const AUTH_LOGIN: &str = "/api/auth/login";

    pub fn movie(id: i64) -> String {
        format!("/api/movies/{}", id)
    }

    pub fn similar_movies(id: i64) -> String {
        format!("/api/movies/{}/similar", id)
    }

    pub fn genre_movies(genre_id: i64) -> String {
        format!("/api/movies/genre/{}", genre_id)
    }
}

/// Trait defining the movie catalog API
///
/// This trait can be implemented by both native and WASM HTTP clients.
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait MovieApi {
    /// Popular movies for the home grid
    async fn get_popular_movies(&self) -> Result<MovieListResponse, ApiError>;

    /// All genres known to the catalog
    async fn get_genres(&self) -> Result<GenreListResponse, ApiError>;

    /// A single movie with its genres
    async fn get_movie_details(&self, id: i64) -> Result<Movie, ApiError>;

    /// Movies similar to the given one (may be personalized)
    async fn get_similar_movies(&self, id: i64) -> Result<Vec<Movie>, ApiError>;

    /// The signed-in user's watch history, most recent first
    async fn get_watch_history(&self) -> Result<Vec<WatchHistoryEntry>, ApiError>;

    /// Recommendations derived from the user's history
    async fn get_personalized_recommendations(&self) -> Result<Vec<Movie>, ApiError>;

    /// Record that the signed-in user watched a movie
    async fn add_to_watch_history(&self, movie_id: i64) -> Result<(), ApiError>;

    /// Free-text title search
    async fn search_movies(&self, query: &str) -> Result<MovieListResponse, ApiError>;

    /// Movies tagged with a genre
    async fn get_movies_by_genre(&self, genre_id: i64) -> Result<MovieListResponse, ApiError>;

    /// Exchange credentials for a session token
    async fn login(&self, req: LoginRequest) -> Result<TokenResponse, ApiError>;

    /// Absolute poster URL, or the placeholder when the movie has no poster
    fn image_url(&self, poster_path: Option<&str>) -> String {
        image_url(IMAGE_BASE_URL, PLACEHOLDER_IMAGE, poster_path)
    }
}

/// Join a poster path fragment onto an image base, falling back to the placeholder.
pub fn image_url(base: &str, placeholder: &str, poster_path: Option<&str>) -> String {
    match poster_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) if path.starts_with('/') => format!("{}{}", base, path),
        Some(path) => format!("{}/{}", base, path),
        None => placeholder.to_string(),
    }
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Optional auth token for authenticated requests
    pub auth_token: Option<String>,
    /// CDN prefix for poster images
    pub image_base_url: String,
    /// URL used when a movie has no poster
    pub placeholder_image: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            image_base_url: IMAGE_BASE_URL.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub fn image_url(&self, poster_path: Option<&str>) -> String {
        image_url(&self.image_base_url, &self.placeholder_image, poster_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            ApiError::from_status(401, "expired"),
            ApiError::Auth("expired".to_string())
        );
        assert_eq!(
            ApiError::from_status(404, "gone"),
            ApiError::NotFound("gone".to_string())
        );
        assert_eq!(
            ApiError::from_status(502, "bad gateway"),
            ApiError::Server {
                status: 502,
                message: "bad gateway".to_string()
            }
        );
    }

    #[test]
    fn image_url_joins_or_falls_back() {
        let config = ApiClientConfig::new("http://localhost:8000");
        assert_eq!(
            config.image_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            config.image_url(Some("abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(config.image_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(config.image_url(Some("  ")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn config_builders() {
        let config = ApiClientConfig::new("http://api.test")
            .with_token("t0k");
        assert_eq!(config.url(endpoints::GENRES), "http://api.test/api/movies/genres");
        assert_eq!(config.auth_token.as_deref(), Some("t0k"));
        assert_eq!(config.image_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(endpoints::similar_movies(42), "/api/movies/42/similar");
    }
}
