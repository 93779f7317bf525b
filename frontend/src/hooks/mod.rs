//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_api;
mod use_load;

pub use use_api::use_api;
pub use use_load::use_load;
