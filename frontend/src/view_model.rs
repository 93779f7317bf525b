//! Render-agnostic shapes for every card and panel.
//!
//! Functions here are pure: the same movie and session always produce the
//! same model. Components in `crate::components` only turn models into markup.

use crate::lifecycle::Target;
use crate::session::SessionState;
use shared::{Genre, Movie, MovieApi, WatchHistoryEntry};

/// Shown wherever a value is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a movie has no overview
pub const NO_OVERVIEW: &str = "No overview available.";

/// The "mark as watched" affordance; only present for signed-in users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchControl {
    pub movie_id: i64,
}

impl WatchControl {
    fn for_session(movie: &Movie, session: SessionState) -> Option<Self> {
        session
            .is_authenticated()
            .then_some(WatchControl { movie_id: movie.id })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieCardModel {
    pub key: i64,
    pub title: String,
    pub poster_url: String,
    pub fallback_url: String,
    pub year: String,
    pub rating: String,
    /// Id carried by the "View Details" link
    pub detail_id: i64,
    pub watch: Option<WatchControl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailModel {
    pub title: String,
    pub poster_url: String,
    pub fallback_url: String,
    /// "1999 | 139 min | 8.4/10"
    pub meta: String,
    pub overview: String,
    pub genres: Vec<String>,
    pub watch: Option<WatchControl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreTileModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCardModel {
    pub key: String,
    pub title: String,
    pub poster_url: String,
    pub fallback_url: String,
    pub watched_on: String,
    pub detail_id: i64,
}

/// A list region: either items (possibly none) or an explicit empty notice.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty(&'static str),
}

#[cfg(test)]
impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Empty(_) => &[],
        }
    }
}

/// Wrap `items` for `target`, substituting its empty notice when it has one.
pub fn listing<T>(target: Target, items: Vec<T>) -> Listing<T> {
    match target.empty_message() {
        Some(message) if items.is_empty() => Listing::Empty(message),
        _ => Listing::Items(items),
    }
}

pub fn format_year(movie: &Movie) -> String {
    movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_rating(vote_average: Option<f64>) -> String {
    vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn detail_meta(movie: &Movie) -> String {
    let runtime = movie
        .runtime
        .filter(|m| *m > 0)
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let rating = movie
        .vote_average
        .filter(|v| *v > 0.0)
        .map(|v| format!("{:.1}/10", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("{} | {} | {}", format_year(movie), runtime, rating)
}

pub fn movie_card<A: MovieApi>(movie: &Movie, session: SessionState, api: &A) -> MovieCardModel {
    MovieCardModel {
        key: movie.id,
        title: movie.title.clone(),
        poster_url: api.image_url(movie.poster_path.as_deref()),
        fallback_url: api.image_url(None),
        year: format_year(movie),
        rating: format_rating(movie.vote_average),
        detail_id: movie.catalog_id(),
        watch: WatchControl::for_session(movie, session),
    }
}

pub fn movie_cards<A: MovieApi>(movies: &[Movie], session: SessionState, api: &A) -> Vec<MovieCardModel> {
    movies.iter().map(|m| movie_card(m, session, api)).collect()
}

pub fn movie_detail<A: MovieApi>(movie: &Movie, session: SessionState, api: &A) -> MovieDetailModel {
    MovieDetailModel {
        title: movie.title.clone(),
        poster_url: api.image_url(movie.poster_path.as_deref()),
        fallback_url: api.image_url(None),
        meta: detail_meta(movie),
        overview: movie
            .overview
            .clone()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
        watch: WatchControl::for_session(movie, session),
    }
}

pub fn genre_tiles(genres: &[Genre]) -> Vec<GenreTileModel> {
    genres
        .iter()
        .map(|g| GenreTileModel {
            id: g.id,
            name: g.name.clone(),
        })
        .collect()
}

/// History cards keep the server's order; the key includes the position
/// because the same movie can be watched twice.
pub fn history_cards<A: MovieApi>(entries: &[WatchHistoryEntry], api: &A) -> Vec<HistoryCardModel> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryCardModel {
            key: format!("{}-{}", entry.movie.id, i),
            title: entry.movie.title.clone(),
            poster_url: api.image_url(entry.movie.poster_path.as_deref()),
            fallback_url: api.image_url(None),
            watched_on: entry.watched_at.format("%b %-d, %Y").to_string(),
            detail_id: entry.movie.catalog_id(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, StubApi};
    use chrono::{TimeZone, Utc};

    fn sample() -> Movie {
        Movie {
            tmdb_id: Some(603),
            poster_path: Some("/matrix.jpg".to_string()),
            release_date: Some("1999-03-31".to_string()),
            vote_average: Some(8.16),
            runtime: Some(136),
            overview: Some("A hacker learns the truth.".to_string()),
            genres: vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
            ],
            ..movie(12, "The Matrix")
        }
    }

    #[test]
    fn card_has_watch_control_iff_authenticated() {
        let api = StubApi::default();
        for m in [sample(), movie(1, "Bare")] {
            let signed_in = movie_card(&m, SessionState::Authenticated, &api);
            let anonymous = movie_card(&m, SessionState::Anonymous, &api);
            assert_eq!(signed_in.watch, Some(WatchControl { movie_id: m.id }));
            assert_eq!(anonymous.watch, None);
        }
    }

    #[test]
    fn card_rendering_is_deterministic() {
        let api = StubApi::default();
        let m = sample();
        for session in [SessionState::Authenticated, SessionState::Anonymous] {
            assert_eq!(movie_card(&m, session, &api), movie_card(&m, session, &api));
            assert_eq!(movie_detail(&m, session, &api), movie_detail(&m, session, &api));
        }
    }

    #[test]
    fn card_formats_fields() {
        let api = StubApi::default();
        let card = movie_card(&sample(), SessionState::Anonymous, &api);
        assert_eq!(card.year, "1999");
        assert_eq!(card.rating, "8.2");
        assert_eq!(card.detail_id, 603);
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w500/matrix.jpg");

        let bare = movie_card(&movie(5, "Bare"), SessionState::Anonymous, &api);
        assert_eq!(bare.year, NOT_AVAILABLE);
        assert_eq!(bare.rating, NOT_AVAILABLE);
        assert_eq!(bare.detail_id, 5);
        assert_eq!(bare.poster_url, bare.fallback_url);
    }

    #[test]
    fn detail_meta_and_defaults() {
        let api = StubApi::default();
        let detail = movie_detail(&sample(), SessionState::Authenticated, &api);
        assert_eq!(detail.meta, "1999 | 136 min | 8.2/10");
        assert_eq!(detail.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(detail.watch, Some(WatchControl { movie_id: 12 }));

        let bare = movie_detail(&movie(5, "Bare"), SessionState::Anonymous, &api);
        assert_eq!(bare.meta, "N/A | N/A | N/A");
        assert_eq!(bare.overview, NO_OVERVIEW);
        assert!(bare.genres.is_empty());
    }

    #[test]
    fn listing_uses_empty_notice_only_where_defined() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(listing(Target::PopularMovies, empty.clone()), Listing::Items(vec![]));
        assert_eq!(
            listing(Target::SimilarMovies, empty),
            Listing::Empty("No similar movies found.")
        );
        assert_eq!(listing(Target::SimilarMovies, vec![1]).items(), &[1]);
    }

    #[test]
    fn history_keeps_server_order() {
        let api = StubApi::default();
        let entries = vec![
            WatchHistoryEntry {
                movie: movie(2, "Second"),
                watched_at: Utc.with_ymd_and_hms(2026, 3, 2, 21, 0, 0).unwrap(),
            },
            WatchHistoryEntry {
                movie: movie(2, "Second"),
                watched_at: Utc.with_ymd_and_hms(2026, 1, 9, 18, 30, 0).unwrap(),
            },
        ];
        let cards = history_cards(&entries, &api);
        assert_eq!(cards[0].watched_on, "Mar 2, 2026");
        assert_eq!(cards[1].watched_on, "Jan 9, 2026");
        assert_ne!(cards[0].key, cards[1].key);
    }
}
