//! Hook for a catalog client bound to the current session token.

use crate::api::HttpMovieApi;
use crate::session::use_session;
use crate::utils;
use std::rc::Rc;
use yew::prelude::*;

/// Shared catalog client. Rebuilt only when the session token changes.
#[hook]
pub fn use_api() -> Rc<HttpMovieApi> {
    let session = use_session();
    use_memo(session.token, |token| {
        HttpMovieApi::new(utils::api_config(token.as_deref()))
    })
}
