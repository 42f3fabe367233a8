use crate::routes::{auth, coursesearch, health, post, root, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::login_page,
        auth::login,
        auth::signup_page,
        auth::signup,
        auth::logout,
        post::course_listing,
        post::detail,
        post::comment,
        post::post_page,
        post::create_post,
        coursesearch::search_page,
        coursesearch::save_bookmark,
        user::userspage,
        user::usercenter
    ),
    tags(
        (name = "Authentication", description = "Login, signup, and logout"),
        (name = "Posts", description = "Course discussion posts and comments"),
        (name = "Courses", description = "Course search and bookmarking"),
        (name = "Users", description = "User profiles"),
    ),
    info(
        title = "CourseHub API",
        version = "1.0.0",
        description = "Course discussion backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
