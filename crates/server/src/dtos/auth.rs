use serde::Serialize;
use utoipa::ToSchema;

/// Context for the login/signup pages; `flash` mirrors the one-shot notices
/// the pages show after a submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageContext {
    pub flash: Option<String>,
}

/// Validation failure payload: one message per failed rule.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsContext {
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
}
