//! In-memory catalog used by controller and action tests.

use shared::{
    ApiError, Genre, GenreListResponse, LoginRequest, Movie, MovieApi, MovieListResponse,
    TokenResponse, WatchHistoryEntry,
};
use std::cell::RefCell;

/// Minimal movie with only the required fields set
pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        tmdb_id: None,
        title: title.to_string(),
        poster_path: None,
        release_date: None,
        vote_average: None,
        overview: None,
        runtime: None,
        genres: Vec::new(),
    }
}

pub fn genre(id: i64, name: &str) -> Genre {
    Genre {
        id,
        name: name.to_string(),
    }
}

/// The error every failing stub returns
pub fn failure() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

/// Canned catalog. Every call is recorded in `calls` by name and argument.
pub struct StubApi {
    pub popular: Result<Vec<Movie>, ApiError>,
    pub genres: Result<Vec<Genre>, ApiError>,
    pub details: Result<Movie, ApiError>,
    pub similar: Result<Vec<Movie>, ApiError>,
    pub history: Result<Vec<WatchHistoryEntry>, ApiError>,
    pub recommendations: Result<Vec<Movie>, ApiError>,
    pub search: Result<Vec<Movie>, ApiError>,
    pub by_genre: Result<Vec<Movie>, ApiError>,
    pub watch: Result<(), ApiError>,
    pub login: Result<TokenResponse, ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            popular: Ok(Vec::new()),
            genres: Ok(Vec::new()),
            details: Err(ApiError::NotFound("movie".to_string())),
            similar: Ok(Vec::new()),
            history: Ok(Vec::new()),
            recommendations: Ok(Vec::new()),
            search: Ok(Vec::new()),
            by_genre: Ok(Vec::new()),
            watch: Ok(()),
            login: Err(ApiError::Auth("bad credentials".to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl StubApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl MovieApi for StubApi {
    async fn get_popular_movies(&self) -> Result<MovieListResponse, ApiError> {
        self.record("get_popular_movies".to_string());
        self.popular
            .clone()
            .map(|movies| MovieListResponse { movies })
    }

    async fn get_genres(&self) -> Result<GenreListResponse, ApiError> {
        self.record("get_genres".to_string());
        self.genres.clone().map(|genres| GenreListResponse { genres })
    }

    async fn get_movie_details(&self, id: i64) -> Result<Movie, ApiError> {
        self.record(format!("get_movie_details({})", id));
        self.details.clone()
    }

    async fn get_similar_movies(&self, id: i64) -> Result<Vec<Movie>, ApiError> {
        self.record(format!("get_similar_movies({})", id));
        self.similar.clone()
    }

    async fn get_watch_history(&self) -> Result<Vec<WatchHistoryEntry>, ApiError> {
        self.record("get_watch_history".to_string());
        self.history.clone()
    }

    async fn get_personalized_recommendations(&self) -> Result<Vec<Movie>, ApiError> {
        self.record("get_personalized_recommendations".to_string());
        self.recommendations.clone()
    }

    async fn add_to_watch_history(&self, movie_id: i64) -> Result<(), ApiError> {
        self.record(format!("add_to_watch_history({})", movie_id));
        self.watch.clone()
    }

    async fn search_movies(&self, query: &str) -> Result<MovieListResponse, ApiError> {
        self.record(format!("search_movies({})", query));
        self.search.clone().map(|movies| MovieListResponse { movies })
    }

    async fn get_movies_by_genre(&self, genre_id: i64) -> Result<MovieListResponse, ApiError> {
        self.record(format!("get_movies_by_genre({})", genre_id));
        self.by_genre
            .clone()
            .map(|movies| MovieListResponse { movies })
    }

    async fn login(&self, req: LoginRequest) -> Result<TokenResponse, ApiError> {
        self.record(format!("login({})", req.email));
        self.login.clone()
    }
}
