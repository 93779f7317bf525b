/// localStorage key holding the opaque session token.
/// Presence of a non-empty value means the user is signed in.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Base URL prepended to poster path fragments.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image shown when a movie has no poster.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.jpg";
