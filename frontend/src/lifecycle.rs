//! Load lifecycle shared by every page controller.
//!
//! Each render region ("target") goes `Idle -> Loading -> Rendered | Errored`
//! exactly once per load. Failures are logged and turned into an inline
//! fallback; they never escape the controller.

use futures_util::future::{AbortHandle, Abortable};
use shared::ApiError;
use std::fmt;
use std::future::Future;

/// A region of the page owned by exactly one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    PopularMovies,
    Genres,
    MovieDetails,
    SimilarMovies,
    WatchHistory,
    Recommendations,
    SearchResults,
    GenreMovies,
}

impl Target {
    /// Human-readable name used in logs and fallback text
    pub fn name(self) -> &'static str {
        match self {
            Target::PopularMovies => "popular movies",
            Target::Genres => "genres",
            Target::MovieDetails => "movie details",
            Target::SimilarMovies => "similar movies",
            Target::WatchHistory => "watch history",
            Target::Recommendations => "recommendations",
            Target::SearchResults => "search results",
            Target::GenreMovies => "genre movies",
        }
    }

    /// Message shown when a load succeeded with nothing in it.
    ///
    /// `None` means an empty result renders as an empty grid.
    pub fn empty_message(self) -> Option<&'static str> {
        match self {
            Target::SimilarMovies => Some("No similar movies found."),
            Target::WatchHistory => Some("You haven't watched any movies yet."),
            Target::Recommendations => {
                Some("Start watching movies to get personalized recommendations!")
            }
            Target::SearchResults => Some("No movies matched your search."),
            Target::GenreMovies => Some("No movies in this genre yet."),
            Target::PopularMovies | Target::Genres | Target::MovieDetails => None,
        }
    }

    /// Loading indicator caption
    pub fn loading_label(self) -> String {
        format!("Loading {}...", self.name())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything that can go wrong between a page and the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// The URL lacks a usable identifier; no request was made
    #[error("missing or malformed `{param}` for {target}")]
    MissingIdentifier { target: Target, param: &'static str },
    /// A catalog call was rejected
    #[error("failed to load {target}: {source}")]
    LoadFailure { target: Target, source: ApiError },
    /// A user-triggered mutation was rejected
    #[error("action failed: {source}")]
    ActionFailure { source: ApiError },
}

impl ViewError {
    pub fn missing(target: Target, param: &'static str) -> Self {
        ViewError::MissingIdentifier { target, param }
    }

    /// Inline text rendered in place of the region's content.
    pub fn fallback_message(&self) -> String {
        match self {
            ViewError::MissingIdentifier { param: "q", .. } => {
                "Enter a search term to find movies.".to_string()
            }
            ViewError::MissingIdentifier { target, .. } => match target {
                Target::GenreMovies => "Invalid genre.".to_string(),
                _ => "Invalid movie ID".to_string(),
            },
            ViewError::LoadFailure { target, .. } => {
                format!("Failed to load {}. Please try again later.", target)
            }
            ViewError::ActionFailure { .. } => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// State of one render target for one load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Rendered(T),
    Errored(ViewError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> From<Result<T, ViewError>> for LoadState<T> {
    fn from(result: Result<T, ViewError>) -> Self {
        match result {
            Ok(value) => LoadState::Rendered(value),
            Err(err) => LoadState::Errored(err),
        }
    }
}

impl<T> LoadState<T> {
    /// `Idle -> Loading`. Returns false (and changes nothing) from any other state.
    pub fn begin(&mut self) -> bool {
        if matches!(self, LoadState::Idle) {
            *self = LoadState::Loading;
            true
        } else {
            false
        }
    }

    /// `Loading -> Rendered | Errored`. Terminal states never move again.
    pub fn settle(&mut self, result: Result<T, ViewError>) -> bool {
        if matches!(self, LoadState::Loading) {
            *self = result.into();
            true
        } else {
            false
        }
    }

    /// Spinner should be visible
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Derive a view from the loaded value, keeping the lifecycle position.
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> LoadState<U> {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Rendered(value) => LoadState::Rendered(f(value)),
            LoadState::Errored(err) => LoadState::Errored(err.clone()),
        }
    }
}

#[cfg(test)]
impl<T> LoadState<T> {
    pub fn rendered(&self) -> Option<&T> {
        match self {
            LoadState::Rendered(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            LoadState::Errored(err) => Some(err),
            _ => None,
        }
    }
}

/// Await one catalog call on behalf of `target`.
///
/// The returned state is always terminal.
pub async fn load<T, Fut>(target: Target, call: Fut) -> LoadState<T>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut state = LoadState::Idle;
    state.begin();
    let result = call.await.map_err(|source| {
        log::error!("Failed to load {}: {}", target, source);
        ViewError::LoadFailure { target, source }
    });
    state.settle(result);
    state
}

/// Abort handle for an in-flight load. Dropping it cancels the load.
#[derive(Debug)]
pub struct LoadHandle(AbortHandle);

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Wrap a future so it resolves to `None` once its handle is aborted or dropped.
pub fn cancellable<F>(fut: F) -> (impl Future<Output = Option<F::Output>>, LoadHandle)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    let fut = Abortable::new(fut, registration);
    (async move { fut.await.ok() }, LoadHandle(handle))
}

/// Run a load on the browser event loop and hand its outcome to `on_settle`,
/// unless the returned handle was dropped first.
pub fn spawn_load<F, S>(fut: F, on_settle: S) -> LoadHandle
where
    F: Future + 'static,
    S: FnOnce(F::Output) + 'static,
{
    let (fut, handle) = cancellable(fut);
    wasm_bindgen_futures::spawn_local(async move {
        match fut.await {
            Some(outcome) => on_settle(outcome),
            None => log::debug!("Load cancelled before it settled"),
        }
    });
    handle
}
