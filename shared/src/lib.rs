use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Storage and presentation constants shared by every client
pub mod protocol;

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, MovieApi};

/// A movie genre as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// A movie as returned by the catalog endpoints.
///
/// Everything except the identifiers and the title is optional; the server
/// omits or nulls fields it has no data for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal database id (used when recording watch events)
    pub id: i64,
    /// External catalog id, when the movie is mirrored from TMDB
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    pub title: String,
    /// Path fragment appended to the image CDN base URL
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO date ("2019-05-30") or a full timestamp
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Movie {
    /// Id used for detail links: the external catalog id when present.
    pub fn catalog_id(&self) -> i64 {
        self.tmdb_id.unwrap_or(self.id)
    }

    /// Release year parsed from the leading `YYYY-MM-DD` of `release_date`.
    pub fn release_year(&self) -> Option<i32> {
        let raw = self.release_date.as_deref()?;
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One entry of the user's watch history. Order is whatever the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchHistoryEntry {
    #[serde(flatten)]
    pub movie: Movie,
    pub watched_at: DateTime<Utc>,
}

/// Envelope for popular, search and per-genre listings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// Envelope for the genre list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Credentials posted by the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued session credential. The token is opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body of a "mark as watched" request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchRequest {
    pub movie_id: i64,
}
