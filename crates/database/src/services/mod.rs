pub mod comment;
pub mod course;
pub mod post;
pub mod session;
pub mod user;
