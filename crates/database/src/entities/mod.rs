pub mod comments;
pub mod courses;
pub mod posts;
pub mod saved_courses;
pub mod sessions;
pub mod subjects;
pub mod users;
