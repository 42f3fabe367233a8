use axum::{
    Json,
    extract::{Path, State},
};
use database::services::{comment::CommentService, post::PostService, user::UserService};

use crate::dtos::auth::ProfileResponse;
use crate::dtos::user::{CommentSummary, PostSummary, UserCenterResponse};
use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;

/// The logged-in user's own profile
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Current user's profile", body = ProfileResponse),
        (status = 303, description = "Not logged in, redirected to /login")
    ),
    tag = "Users"
)]
pub async fn userspage(user: CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        username: user.0.username,
        email: user.0.email,
    })
}

/// A user's public profile; `tag` "1" shows their posts, anything else
/// their comments
#[utoipa::path(
    get,
    path = "/usercenter/{username}/{tag}",
    params(
        ("username" = String, Path, description = "Profile username"),
        ("tag" = String, Path, description = "Profile view selector")
    ),
    responses(
        (status = 200, description = "Profile view", body = UserCenterResponse),
        (status = 303, description = "Not logged in, redirected to /login"),
        (status = 404, description = "No such user")
    ),
    tag = "Users"
)]
pub async fn usercenter(
    State(state): State<AppState>,
    _viewer: CurrentUser,
    Path((username, tag)): Path<(String, String)>,
) -> Result<Json<UserCenterResponse>, AppError> {
    let user = UserService::find_by_username(&state.db, &username)
        .await?
        .ok_or(AppError::NotFound)?;

    if tag == "1" {
        let posts = PostService::list_by_author(&state.db, user.id)
            .await?
            .into_iter()
            .map(|post| PostSummary {
                id: post.id,
                title: post.title,
                description: post.description,
                post_time: post.post_time,
            })
            .collect();

        Ok(Json(UserCenterResponse {
            username: user.username,
            posts: Some(posts),
            comments: None,
        }))
    } else {
        let comments = CommentService::list_by_author(&state.db, user.id)
            .await?
            .into_iter()
            .map(|comment| CommentSummary {
                id: comment.id,
                detail: comment.detail,
                post_id: comment.post_id,
                comment_time: comment.comment_time,
            })
            .collect();

        Ok(Json(UserCenterResponse {
            username: user.username,
            posts: None,
            comments: Some(comments),
        }))
    }
}
