use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use database::services::{
    comment::CommentService,
    course::CourseService,
    post::{CommentWithAuthor, PostService, PostWithRefs},
};

use crate::dtos::auth::ErrorsContext;
use crate::dtos::course::{CourseOptionResponse, CourseSearchPageResponse};
use crate::dtos::post::{
    CommentResponse, ListQueryParams, PaginationMeta, PostDetailResponse, PostListResponse,
    PostResponse,
};
use crate::error::AppError;
use crate::forms::{CommentForm, PostForm};
use crate::session::CurrentUser;
use crate::state::AppState;

/// All posts, newest first
#[utoipa::path(
    get,
    path = "/course",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Post listing", body = PostListResponse),
        (status = 303, description = "Not logged in, redirected to /login")
    ),
    tag = "Posts"
)]
pub async fn course_listing(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<PostListResponse>, AppError> {
    let page = params.page.max(1);
    let per_page = params.per_page.clamp(1, 100);

    let (rows, total_items) = PostService::list_paginated(&state.db, page, per_page).await?;
    let posts = rows.into_iter().map(to_post_response).collect();

    let total_pages = total_items.div_ceil(per_page);
    let pagination = PaginationMeta {
        page,
        per_page,
        total_pages,
        total_items,
        has_next: page < total_pages,
        has_prev: page > 1,
    };

    Ok(Json(PostListResponse { posts, pagination }))
}

/// A single post with its comments
#[utoipa::path(
    get,
    path = "/detail/{post_id}",
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDetailResponse),
        (status = 404, description = "Post not found")
    ),
    tag = "Posts"
)]
pub async fn detail(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let (post, author, course, comments) = PostService::get_post_detail(&state.db, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(PostDetailResponse {
        post: to_post_response((post, author, course)),
        comments: comments.into_iter().map(to_comment_response).collect(),
    }))
}

/// Attach a comment to a post
#[utoipa::path(
    post,
    path = "/comment/{post_id}",
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 303, description = "Comment created, redirected to the post detail"),
        (status = 404, description = "Post not found"),
        (status = 422, description = "Validation failure", body = ErrorsContext)
    ),
    tag = "Posts"
)]
pub async fn comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(post_id): Path<i32>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorsContext { errors })).into_response());
    }

    PostService::find_by_id(&state.db, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    CommentService::create(&state.db, form.comment_detail, user.0.id, post_id).await?;

    Ok(Redirect::to(&format!("/detail/{post_id}")).into_response())
}

/// Post-creation page context: the selectable course list
#[utoipa::path(
    get,
    path = "/post",
    responses(
        (status = 200, description = "Post form options", body = CourseSearchPageResponse),
        (status = 303, description = "Not logged in, redirected to /login")
    ),
    tag = "Posts"
)]
pub async fn post_page(
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

/// Create a post under the session user's identity
#[utoipa::path(
    post,
    path = "/post",
    responses(
        (status = 303, description = "Post created, redirected to /course"),
        (status = 404, description = "Course not found"),
        (status = 422, description = "Validation failure", body = ErrorsContext)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorsContext { errors })).into_response());
    }

    // Posts must hang off an existing course
    CourseService::find_by_id(&state.db, form.course_id)
        .await?
        .ok_or(AppError::NotFound)?;

    PostService::create(
        &state.db,
        form.title,
        form.description,
        user.0.id,
        form.course_id,
    )
    .await?;

    Ok(Redirect::to("/course").into_response())
}

fn to_post_response((post, author, course): PostWithRefs) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        description: post.description,
        author: author.map(|u| u.username).unwrap_or_default(),
        course: course.map(|c| c.name).unwrap_or_default(),
        post_time: post.post_time,
    }
}

fn to_comment_response((comment, author): CommentWithAuthor) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        detail: comment.detail,
        author: author.map(|u| u.username).unwrap_or_default(),
        comment_time: comment.comment_time,
    }
}
