use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseOptionResponse {
    pub id: i32,
    pub name: String,
    pub subject: String,
}

/// Context for the course search form: the selectable course list.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseSearchPageResponse {
    pub options: Vec<CourseOptionResponse>,
}
