use crate::lifecycle::{load, LoadState, Target};
use crate::session::SessionState;
use crate::view_model::{genre_tiles, movie_cards, GenreTileModel, MovieCardModel};
use shared::{Genre, Movie, MovieApi};
use std::rc::Rc;

/// Popular-movies grid and genre list. The two loads are independent and
/// run side by side.
pub struct HomeController<A> {
    api: Rc<A>,
    session: SessionState,
}

impl<A> Clone for HomeController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
        }
    }
}

impl<A: MovieApi> HomeController<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    pub async fn load_popular(&self) -> LoadState<Vec<Movie>> {
        load(Target::PopularMovies, async {
            self.api.get_popular_movies().await.map(|r| r.movies)
        })
        .await
    }

    pub async fn load_genres(&self) -> LoadState<Vec<Genre>> {
        load(Target::Genres, async {
            self.api.get_genres().await.map(|r| r.genres)
        })
        .await
    }

    /// An empty list is a valid, empty grid
    pub fn popular_grid(&self, movies: &[Movie]) -> Vec<MovieCardModel> {
        movie_cards(movies, self.session, self.api.as_ref())
    }

    pub fn genre_tiles(&self, genres: &[Genre]) -> Vec<GenreTileModel> {
        genre_tiles(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failure, genre, movie, StubApi};
    use futures::executor::block_on;
    use futures_util::future::join;

    /// Both targets loaded side by side and derived, as the home page does
    fn render(
        controller: &HomeController<StubApi>,
    ) -> (LoadState<Vec<MovieCardModel>>, LoadState<Vec<GenreTileModel>>) {
        let (popular, genres) = block_on(join(controller.load_popular(), controller.load_genres()));
        (
            popular.map(|movies| controller.popular_grid(movies)),
            genres.map(|genres| controller.genre_tiles(genres)),
        )
    }

    #[test]
    fn empty_popular_list_is_an_empty_grid() {
        let api = Rc::new(StubApi::default());
        let (popular, _) = render(&HomeController::new(api, SessionState::Anonymous));
        assert_eq!(popular, LoadState::Rendered(vec![]));
    }

    #[test]
    fn popular_failure_leaves_genres_untouched() {
        let api = Rc::new(StubApi {
            popular: Err(failure()),
            genres: Ok(vec![genre(18, "Drama"), genre(35, "Comedy")]),
            ..StubApi::default()
        });
        let (popular, genres) = render(&HomeController::new(api, SessionState::Authenticated));

        assert_eq!(
            popular.error().map(|e| e.fallback_message()),
            Some("Failed to load popular movies. Please try again later.".to_string())
        );
        assert!(genres.error().is_none());
        let tiles = genres.rendered().expect("genres rendered");
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].name, "Drama");
    }

    #[test]
    fn genre_failure_leaves_grid_untouched() {
        let api = Rc::new(StubApi {
            popular: Ok(vec![movie(1, "Alien")]),
            genres: Err(failure()),
            ..StubApi::default()
        });
        let (popular, genres) = render(&HomeController::new(api, SessionState::Anonymous));
        assert_eq!(popular.rendered().map(Vec::len), Some(1));
        assert!(genres.error().is_some());
    }

    #[test]
    fn grid_cards_follow_session_without_refetch() {
        let api = Rc::new(StubApi {
            popular: Ok(vec![movie(1, "Alien"), movie(2, "Aliens")]),
            ..StubApi::default()
        });
        let signed_in = HomeController::new(api.clone(), SessionState::Authenticated);
        let movies = block_on(signed_in.load_popular());
        let movies = movies.rendered().expect("popular rendered");
        assert!(signed_in.popular_grid(movies).iter().all(|c| c.watch.is_some()));

        // The page keeps the loaded movies and re-derives with the new session
        let signed_out = HomeController::new(api.clone(), SessionState::Anonymous);
        assert!(signed_out.popular_grid(movies).iter().all(|c| c.watch.is_none()));
        assert_eq!(api.calls(), vec!["get_popular_movies"]);
    }
}
