pub mod auth;
pub mod coursesearch;
pub mod health;
pub mod post;
pub mod root;
pub mod user;
