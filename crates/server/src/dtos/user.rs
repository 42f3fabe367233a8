use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub post_time: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentSummary {
    pub id: i32,
    pub detail: String,
    pub post_id: i32,
    pub comment_time: NaiveDateTime,
}

/// The usercenter page: the `tag` path segment picks which of the two
/// profile views is populated.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserCenterResponse {
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostSummary>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentSummary>>,
}
