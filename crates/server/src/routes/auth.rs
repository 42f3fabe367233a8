use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use database::services::{session::SessionService, user::UserService};
use log::info;

use crate::dtos::auth::{ErrorsContext, PageContext};
use crate::error::AppError;
use crate::forms::{LoginForm, RegisterForm};
use crate::password;
use crate::session::{CurrentUser, SESSION_COOKIE};
use crate::state::AppState;

/// Login page context
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login page", body = PageContext)
    ),
    tag = "Authentication"
)]
pub async fn login_page() -> Json<PageContext> {
    Json(PageContext { flash: None })
}

/// Log a user in and establish a session cookie
#[utoipa::path(
    post,
    path = "/login",
    responses(
        (status = 303, description = "Logged in, redirected to /user"),
        (status = 401, description = "Invalid credentials", body = PageContext),
        (status = 422, description = "Validation failure", body = ErrorsContext)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorsContext { errors })).into_response());
    }

    let user = match UserService::find_by_username(&state.db, &form.username).await? {
        Some(user) => user,
        None => {
            // Unknown users cost the same as a failed verification, and get
            // the same message, so usernames cannot be probed
            password::verify_dummy();
            return Ok(invalid_credentials());
        }
    };

    if !password::verify_password(&form.password, &user.password_hash) {
        return Ok(invalid_credentials());
    }

    let session = SessionService::create(&state.db, user.id).await?;
    info!("user {} logged in", user.username);

    let cookie = Cookie::build((SESSION_COOKIE, session.token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Redirect::to("/user")).into_response())
}

fn invalid_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(PageContext {
            flash: Some("Invalid username or password!".to_owned()),
        }),
    )
        .into_response()
}

/// Signup page context
#[utoipa::path(
    get,
    path = "/signup",
    responses(
        (status = 200, description = "Signup page", body = PageContext)
    ),
    tag = "Authentication"
)]
pub async fn signup_page() -> Json<PageContext> {
    Json(PageContext { flash: None })
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    responses(
        (status = 201, description = "User registered", body = PageContext),
        (status = 409, description = "Username or email already taken", body = PageContext),
        (status = 422, description = "Validation failure", body = ErrorsContext)
    ),
    tag = "Authentication"
)]
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorsContext { errors })).into_response());
    }

    // Pre-check so a duplicate comes back as a flash message instead of a
    // constraint error; the unique indexes still catch races
    let username_taken = UserService::find_by_username(&state.db, &form.username)
        .await?
        .is_some();
    let email_taken = UserService::find_by_email(&state.db, &form.email)
        .await?
        .is_some();

    if username_taken || email_taken {
        return Ok((
            StatusCode::CONFLICT,
            Json(PageContext {
                flash: Some("Username or email already taken".to_owned()),
            }),
        )
            .into_response());
    }

    let hash = password::hash_password(&form.password).map_err(|_| AppError::Password)?;
    let user = UserService::create(&state.db, form.username, form.email, hash).await?;
    info!("registered user {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(PageContext {
            flash: Some("Signup successful!".to_owned()),
        }),
    )
        .into_response())
}

/// Drop the current session and clear the cookie
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Logged out, redirected to /")
    ),
    tag = "Authentication"
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    _user: CurrentUser,
) -> Result<Response, AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        SessionService::delete(&state.db, cookie.value()).await?;
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    Ok((jar.remove(removal), Redirect::to("/")).into_response())
}
