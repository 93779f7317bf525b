use super::parse_id;
use crate::lifecycle::{load, LoadState, Target, ViewError};
use crate::session::SessionState;
use crate::view_model::{listing, movie_cards, GenreTileModel, Listing, MovieCardModel};
use serde::{Deserialize, Serialize};
use shared::{Movie, MovieApi};
use std::rc::Rc;

/// Query string of the genre page: `?id=<genre id>&name=<display name>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenreQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&GenreTileModel> for GenreQuery {
    fn from(tile: &GenreTileModel) -> Self {
        Self {
            id: Some(tile.id.to_string()),
            name: Some(tile.name.clone()),
        }
    }
}

pub struct GenreController<A> {
    api: Rc<A>,
    session: SessionState,
    genre_id: i64,
    name: String,
}

impl<A> Clone for GenreController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
            genre_id: self.genre_id,
            name: self.name.clone(),
        }
    }
}

impl<A: MovieApi> GenreController<A> {
    pub fn init(api: Rc<A>, session: SessionState, query: &GenreQuery) -> Result<Self, ViewError> {
        let genre_id = parse_id(Target::GenreMovies, "id", query.id.as_deref())?;
        let name = query
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Genre")
            .to_string();
        Ok(Self {
            api,
            session,
            genre_id,
            name,
        })
    }

    /// Page heading: the display name forwarded in the link
    pub fn heading(&self) -> &str {
        &self.name
    }

    pub async fn load_movies(&self) -> LoadState<Vec<Movie>> {
        load(Target::GenreMovies, async {
            self.api.get_movies_by_genre(self.genre_id).await.map(|r| r.movies)
        })
        .await
    }

    pub fn movies(&self, movies: &[Movie]) -> Listing<MovieCardModel> {
        listing(
            Target::GenreMovies,
            movie_cards(movies, self.session, self.api.as_ref()),
        )
    }
}
