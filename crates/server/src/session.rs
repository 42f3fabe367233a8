use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use database::{entities::users, services::session::SessionService};
use log::warn;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "coursehub_session";

/// The logged-in user, resolved from the session cookie.
pub struct CurrentUser(pub users::Model);

/// Rejection for session-gated routes: anything short of a valid, unexpired
/// session sends the client to the login page.
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or(AuthRedirect)?;

        match SessionService::resolve(&state.db, &token).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(AuthRedirect),
            Err(err) => {
                warn!("session lookup failed: {err}");
                Err(AuthRedirect)
            }
        }
    }
}
