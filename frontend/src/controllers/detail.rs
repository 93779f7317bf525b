use super::parse_id;
use crate::lifecycle::{load, LoadState, Target, ViewError};
use crate::session::SessionState;
use crate::view_model::{listing, movie_cards, movie_detail, Listing, MovieCardModel, MovieDetailModel};
use serde::{Deserialize, Serialize};
use shared::{Movie, MovieApi};
use std::rc::Rc;

/// Query string of the detail page: `?id=<catalog id>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MovieQuery {
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }
}

/// One movie plus its similar-movies list.
///
/// The similar list loads only after the primary load settled, and lives in
/// its own target: its failure never hides the movie.
pub struct DetailController<A> {
    api: Rc<A>,
    session: SessionState,
    movie_id: i64,
}

impl<A> Clone for DetailController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
            movie_id: self.movie_id,
        }
    }
}

/// What the similar-movies load depends on. A change in either field starts
/// a fresh load of that target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarTrigger {
    pub primary_settled: bool,
    pub session: SessionState,
}

impl SimilarTrigger {
    pub fn new<T>(primary: &LoadState<T>, session: SessionState) -> Self {
        Self {
            primary_settled: primary.is_terminal(),
            session,
        }
    }
}

impl<A: MovieApi> DetailController<A> {
    pub fn init(api: Rc<A>, session: SessionState, raw_id: Option<&str>) -> Result<Self, ViewError> {
        let movie_id = parse_id(Target::MovieDetails, "id", raw_id)?;
        Ok(Self::for_movie(api, session, movie_id))
    }

    /// For an id that was already validated
    pub fn for_movie(api: Rc<A>, session: SessionState, movie_id: i64) -> Self {
        Self {
            api,
            session,
            movie_id,
        }
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }

    pub async fn load_primary(&self) -> LoadState<Movie> {
        load(
            Target::MovieDetails,
            self.api.get_movie_details(self.movie_id),
        )
        .await
    }

    async fn load_similar(&self) -> LoadState<Vec<Movie>> {
        load(
            Target::SimilarMovies,
            self.api.get_similar_movies(self.movie_id),
        )
        .await
    }

    pub fn detail(&self, movie: &Movie) -> MovieDetailModel {
        movie_detail(movie, self.session, self.api.as_ref())
    }

    pub fn similar(&self, movies: &[Movie]) -> Listing<MovieCardModel> {
        listing(
            Target::SimilarMovies,
            movie_cards(movies, self.session, self.api.as_ref()),
        )
    }

    /// Similar movies, held back until the primary target settled
    /// (either way). Until then the target stays `Loading` and no request is made.
    pub async fn similar_load(&self, trigger: SimilarTrigger) -> LoadState<Vec<Movie>> {
        if !trigger.primary_settled {
            return LoadState::Loading;
        }
        self.load_similar().await
    }
}
