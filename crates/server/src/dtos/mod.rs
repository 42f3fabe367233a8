pub mod auth;
pub mod course;
pub mod post;
pub mod user;
