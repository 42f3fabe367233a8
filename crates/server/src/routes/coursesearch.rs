use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use database::services::course::CourseService;

use crate::dtos::auth::ErrorsContext;
use crate::dtos::course::{CourseOptionResponse, CourseSearchPageResponse};
use crate::error::AppError;
use crate::forms::CourseSearchForm;
use crate::session::CurrentUser;
use crate::state::AppState;

/// The course search form's selectable options
#[utoipa::path(
    get,
    path = "/coursesearch",
    responses(
        (status = 200, description = "Course options", body = CourseSearchPageResponse),
        (status = 303, description = "Not logged in, redirected to /login")
    ),
    tag = "Courses"
)]
pub async fn search_page(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<CourseSearchPageResponse>, AppError> {
    let options = CourseService::list_with_subjects(&state.db)
        .await?
        .into_iter()
        .map(|(course, subject)| CourseOptionResponse {
            id: course.id,
            name: course.name,
            subject: subject.map(|s| s.name).unwrap_or_default(),
        })
        .collect();

    Ok(Json(CourseSearchPageResponse { options }))
}

/// Bookmark the selected course. Only the course label is recorded; the
/// bookmark table carries no user reference, so bookmarks are global.
#[utoipa::path(
    post,
    path = "/coursesearch",
    responses(
        (status = 303, description = "Bookmark saved, redirected back to /coursesearch"),
        (status = 404, description = "Course not found"),
        (status = 422, description = "No course selected", body = ErrorsContext)
    ),
    tag = "Courses"
)]
pub async fn save_bookmark(
    State(state): State<AppState>,
    _user: CurrentUser,
    Form(form): Form<CourseSearchForm>,
) -> Result<Response, AppError> {
    let course_id = match form.validate() {
        Ok(course_id) => course_id,
        Err(errors) => {
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorsContext { errors })).into_response(),
            );
        }
    };

    let course = CourseService::find_by_id(&state.db, course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    CourseService::save_bookmark(&state.db, course.name).await?;

    Ok(Redirect::to("/coursesearch").into_response())
}
