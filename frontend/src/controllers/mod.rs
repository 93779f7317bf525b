//! Page controllers
//!
//! Each controller follows the same lifecycle:
//! - built from navigation identifiers (`init`), failing fast with
//!   `ViewError::MissingIdentifier` before any request
//! - one `load_*` per render target, each independently failable
//! - pure view derivation from loaded data plus the injected session
//!
//! Controllers hold the catalog client behind an `Rc` so the same instance
//! can be shared with the page that renders their output.

mod detail;
mod genre;
mod home;
mod search;
mod space;

pub use detail::{DetailController, MovieQuery, SimilarTrigger};
pub use genre::{GenreController, GenreQuery};
pub use home::HomeController;
pub use search::{SearchController, SearchQuery};
pub use space::SpaceController;

use crate::lifecycle::{Target, ViewError};

/// Parse a positive numeric id from the query string.
fn parse_id(target: Target, param: &'static str, raw: Option<&str>) -> Result<i64, ViewError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            log::error!("No usable `{}` for {}: {:?}", param, target, raw);
            ViewError::missing(target, param)
        })
}
