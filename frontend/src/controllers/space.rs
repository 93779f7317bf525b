use crate::lifecycle::{load, LoadState, Target};
use crate::session::SessionState;
use crate::view_model::{
    history_cards, listing, movie_cards, HistoryCardModel, Listing, MovieCardModel,
};
use shared::{Movie, MovieApi, WatchHistoryEntry};
use std::rc::Rc;

/// Personal space: watch history and personalized recommendations.
pub struct SpaceController<A> {
    api: Rc<A>,
    session: SessionState,
}

impl<A> Clone for SpaceController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
        }
    }
}

impl<A: MovieApi> SpaceController<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    pub async fn load_history(&self) -> LoadState<Vec<WatchHistoryEntry>> {
        load(Target::WatchHistory, self.api.get_watch_history()).await
    }

    pub async fn load_recommendations(&self) -> LoadState<Vec<Movie>> {
        load(
            Target::Recommendations,
            self.api.get_personalized_recommendations(),
        )
        .await
    }

    pub fn history(&self, entries: &[WatchHistoryEntry]) -> Listing<HistoryCardModel> {
        listing(Target::WatchHistory, history_cards(entries, self.api.as_ref()))
    }

    pub fn recommendations(&self, movies: &[Movie]) -> Listing<MovieCardModel> {
        listing(
            Target::Recommendations,
            movie_cards(movies, self.session, self.api.as_ref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failure, movie, StubApi};
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use futures_util::future::join;

    /// Both targets loaded side by side and derived, as the space page does
    fn render(
        controller: &SpaceController<StubApi>,
    ) -> (
        LoadState<Listing<HistoryCardModel>>,
        LoadState<Listing<MovieCardModel>>,
    ) {
        let (history, recommendations) = block_on(join(
            controller.load_history(),
            controller.load_recommendations(),
        ));
        (
            history.map(|entries| controller.history(entries)),
            recommendations.map(|movies| controller.recommendations(movies)),
        )
    }

    #[test]
    fn new_user_sees_both_empty_notices() {
        let api = Rc::new(StubApi::default());
        let (history, recommendations) =
            render(&SpaceController::new(api, SessionState::Authenticated));
        assert_eq!(
            history,
            LoadState::Rendered(Listing::Empty("You haven't watched any movies yet."))
        );
        assert_eq!(
            recommendations,
            LoadState::Rendered(Listing::Empty(
                "Start watching movies to get personalized recommendations!"
            ))
        );
    }

    #[test]
    fn recommendation_failure_keeps_history() {
        let api = Rc::new(StubApi {
            history: Ok(vec![WatchHistoryEntry {
                movie: movie(3, "Heat"),
                watched_at: Utc.with_ymd_and_hms(2026, 10, 1, 20, 0, 0).unwrap(),
            }]),
            recommendations: Err(failure()),
            ..StubApi::default()
        });
        let (history, recommendations) =
            render(&SpaceController::new(api, SessionState::Authenticated));

        let history = history.rendered().expect("history rendered");
        assert_eq!(history.items()[0].title, "Heat");
        assert_eq!(history.items()[0].watched_on, "Oct 1, 2026");
        assert!(recommendations.error().is_some());
    }
}
