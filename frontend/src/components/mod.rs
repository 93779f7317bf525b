mod auth_required;
mod load_view;
pub mod movie_card;
mod movie_detail;
mod navbar;
pub mod toast;
mod watch_button;

pub use auth_required::{AuthRequired, AuthTag};
pub use load_view::{render_listing, render_load, EmptyNotice, ErrorAlert, Spinner};
pub use movie_card::{HistoryCard, MovieCard, MovieGrid};
pub use movie_detail::MovieDetailPanel;
pub use navbar::Navbar;
pub use toast::{use_toast, ToastProvider};
pub use watch_button::WatchButton;
