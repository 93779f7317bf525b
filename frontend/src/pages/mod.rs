pub mod genre;
pub mod home;
pub mod landing;
pub mod movie;
pub mod not_found;
pub mod search;
pub mod space;
