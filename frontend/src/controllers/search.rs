use crate::lifecycle::{load, LoadState, Target, ViewError};
use crate::session::SessionState;
use crate::view_model::{listing, movie_cards, Listing, MovieCardModel};
use serde::{Deserialize, Serialize};
use shared::{Movie, MovieApi};
use std::rc::Rc;

/// Query string of the results page: `?q=<text>`.
/// Percent-encoding is done by the router when the query is pushed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl SearchQuery {
    /// Build from the search box. Blank input yields no navigation.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| SearchQuery {
            q: Some(trimmed.to_string()),
        })
    }
}

pub struct SearchController<A> {
    api: Rc<A>,
    session: SessionState,
    query: String,
}

impl<A> Clone for SearchController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
            query: self.query.clone(),
        }
    }
}

impl<A: MovieApi> SearchController<A> {
    pub fn init(api: Rc<A>, session: SessionState, raw_query: Option<&str>) -> Result<Self, ViewError> {
        let query = raw_query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ViewError::missing(Target::SearchResults, "q"))?;
        Ok(Self {
            api,
            session,
            query: query.to_string(),
        })
    }

    pub fn heading(&self) -> String {
        format!("Results for \"{}\"", self.query)
    }

    pub async fn load_results(&self) -> LoadState<Vec<Movie>> {
        load(Target::SearchResults, async {
            self.api.search_movies(&self.query).await.map(|r| r.movies)
        })
        .await
    }

    pub fn results(&self, movies: &[Movie]) -> Listing<MovieCardModel> {
        listing(
            Target::SearchResults,
            movie_cards(movies, self.session, self.api.as_ref()),
        )
    }
}
