//! gloo-net implementation of the catalog API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::endpoints;
use shared::{
    ApiClientConfig, ApiError, GenreListResponse, LoginRequest, Movie, MovieApi,
    MovieListResponse, TokenResponse, WatchHistoryEntry, WatchRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpMovieApi {
    config: ApiClientConfig,
}

impl HttpMovieApi {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    /// Attach the bearer token when signed in
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.config.url(endpoint)))
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.config.url(endpoint)))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: serde::Serialize>(&self, endpoint: &str, body: &B) -> Result<Response, ApiError> {
        let request = self
            .post(endpoint)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
}

/// Turn non-2xx responses into the matching `ApiError`
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => response.status_text(),
    };
    Err(ApiError::from_status(status, message))
}

impl MovieApi for HttpMovieApi {
    async fn get_popular_movies(&self) -> Result<MovieListResponse, ApiError> {
        self.fetch_json(self.get(endpoints::POPULAR_MOVIES)).await
    }

    async fn get_genres(&self) -> Result<GenreListResponse, ApiError> {
        self.fetch_json(self.get(endpoints::GENRES)).await
    }

    async fn get_movie_details(&self, id: i64) -> Result<Movie, ApiError> {
        self.fetch_json(self.get(&endpoints::movie(id))).await
    }

    async fn get_similar_movies(&self, id: i64) -> Result<Vec<Movie>, ApiError> {
        self.fetch_json(self.get(&endpoints::similar_movies(id))).await
    }

    async fn get_watch_history(&self) -> Result<Vec<WatchHistoryEntry>, ApiError> {
        self.fetch_json(self.get(endpoints::WATCH_HISTORY)).await
    }

    async fn get_personalized_recommendations(&self) -> Result<Vec<Movie>, ApiError> {
        self.fetch_json(self.get(endpoints::RECOMMENDATIONS)).await
    }

    async fn add_to_watch_history(&self, movie_id: i64) -> Result<(), ApiError> {
        self.post_json(endpoints::WATCH_HISTORY, &WatchRequest { movie_id })
            .await
            .map(|_| ())
    }

    async fn search_movies(&self, query: &str) -> Result<MovieListResponse, ApiError> {
        self.fetch_json(self.get(endpoints::SEARCH).query([("query", query)]))
            .await
    }

    async fn get_movies_by_genre(&self, genre_id: i64) -> Result<MovieListResponse, ApiError> {
        self.fetch_json(self.get(&endpoints::genre_movies(genre_id)))
            .await
    }

    async fn login(&self, req: LoginRequest) -> Result<TokenResponse, ApiError> {
        let response = self.post_json(endpoints::AUTH_LOGIN, &req).await?;
        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn image_url(&self, poster_path: Option<&str>) -> String {
        self.config.image_url(poster_path)
    }
}
