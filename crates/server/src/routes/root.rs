use axum::Json;

use crate::dtos::auth::PageContext;

/// The landing page context; logout redirects here
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = PageContext)
    ),
    tag = "Pages"
)]
pub async fn root() -> Json<PageContext> {
    Json(PageContext { flash: None })
}
