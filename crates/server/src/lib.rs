use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod doc;
pub mod dtos;
pub mod error;
pub mod forms;
pub mod password;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;

use state::AppState;

/// Builds the application router. Kept separate from `main` so tests can
/// drive the router against an in-memory database.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route(
            "/signup",
            get(routes::auth::signup_page).post(routes::auth::signup),
        )
        .route("/logout", get(routes::auth::logout))
        .route("/course", get(routes::post::course_listing))
        .route("/user", get(routes::user::userspage))
        .route(
            "/coursesearch",
            get(routes::coursesearch::search_page).post(routes::coursesearch::save_bookmark),
        )
        .route("/detail/{post_id}", get(routes::post::detail))
        .route("/comment/{post_id}", post(routes::post::comment))
        .route(
            "/post",
            get(routes::post::post_page).post(routes::post::create_post),
        )
        .route("/usercenter/{username}/{tag}", get(routes::user::usercenter))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", doc::ApiDoc::openapi()),
        )
        .layer(CompressionLayer::new())
        .with_state(state)
}
