/// Signup and login endpoints
///
/// There is no session: a successful login is a credential check followed by a
/// redirect.
///
/// # Endpoints
///
/// - `GET  /signup` - Signup form
/// - `POST /signup` - Create an account
/// - `GET  /login` - Login form
/// - `POST /login` - Check credentials

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    views::{self, LoginPage, SignupPage},
};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use moviedash_shared::{
    auth::password::{self, PasswordError},
    models::user::CreateUser,
};
use serde::Deserialize;
use tracing::{error, info};
use validator::Validate;

/// Message returned when signup hits an existing email
pub const EMAIL_EXISTS: &str = "Email already exists";

/// Message returned when signup is missing a field
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// Signup form body
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login form body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Renders the signup form
pub async fn signup_form() -> ApiResult<Html<String>> {
    views::render(&SignupPage::default())
}

/// Creates an account
///
/// # Endpoint
///
/// ```text
/// POST /signup
/// Content-Type: application/x-www-form-urlencoded
///
/// email=a%40x.com&password=secret
/// ```
///
/// # Responses
///
/// - `303 See Other` to `/login` on success
/// - `400 Bad Request`: `Email already exists`, a field is empty, or the
///   password is longer than bcrypt can hash
/// - `500 Internal Server Error`: `Error: <message>`
///
/// The lookup and the insert are separate store calls, so two concurrent
/// signups for one address can both succeed.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> ApiResult<Redirect> {
    if form.validate().is_err() {
        info!(email = %form.email, "Signup rejected: missing field");
        return Err(ApiError::BadRequest(CREDENTIALS_REQUIRED.to_string()));
    }

    let existing = state.users.find_by_email(&form.email).await.map_err(|e| {
        error!(email = %form.email, error = %e, "Error during signup");
        ApiError::from(e)
    })?;

    if !existing.is_empty() {
        info!(email = %form.email, "Email already exists");
        return Err(ApiError::BadRequest(EMAIL_EXISTS.to_string()));
    }

    let password_hash = password::hash_password_async(form.password, state.password)
        .await
        .map_err(|e| {
            if matches!(e, PasswordError::TooLong(_)) {
                info!(email = %form.email, "Signup rejected: password too long");
            } else {
                error!(email = %form.email, error = %e, "Error during signup");
            }
            ApiError::from(e)
        })?;

    let user = state
        .users
        .insert(CreateUser {
            email: form.email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| {
            error!(email = %form.email, error = %e, "Error during signup");
            ApiError::from(e)
        })?;

    info!(email = %user.email, user_id = %user.id, "User signed up");
    Ok(Redirect::to("/login"))
}

/// Renders the login form
pub async fn login_form() -> ApiResult<Html<String>> {
    views::render(&LoginPage::default())
}

/// Checks credentials
///
/// # Responses
///
/// - `303 See Other` to `/dashboard` on a match
/// - `401 Unauthorized`: `Invalid email or password` for an unknown email or a
///   wrong password alike
/// - `500 Internal Server Error`: `Error: <message>`, including a stored hash
///   that cannot be parsed
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Redirect> {
    let users = state.users.find_by_email(&form.email).await.map_err(|e| {
        error!(email = %form.email, error = %e, "Error during login");
        ApiError::from(e)
    })?;

    let Some(user) = users.into_iter().next() else {
        info!(email = %form.email, "Invalid email or password");
        return Err(ApiError::Unauthorized);
    };

    let matched = password::verify_password_async(form.password, user.password_hash)
        .await
        .map_err(|e| {
            error!(email = %form.email, error = %e, "Error during login");
            ApiError::from(e)
        })?;

    if !matched {
        info!(email = %form.email, "Invalid email or password");
        return Err(ApiError::Unauthorized);
    }

    info!(email = %form.email, "User logged in");
    Ok(Redirect::to("/dashboard"))
}
