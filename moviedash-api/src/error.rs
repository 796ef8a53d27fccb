/// Error handling for the web server
///
/// Handlers return `Result<T, ApiError>`; the error side renders as a plain
/// text response. Handlers log failures with request context before
/// converting them, so nothing is logged here.
///
/// | Variant          | Status | Body                          |
/// |------------------|--------|-------------------------------|
/// | `BadRequest`     | 400    | the message                   |
/// | `Unauthorized`   | 401    | `Invalid email or password`   |
/// | `InternalError`  | 500    | `Error: <message>`            |
/// | `MovieFetch`     | 500    | `Error fetching movies`       |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use moviedash_shared::{auth::password::PasswordError, omdb::OmdbError, store::StoreError};
use std::fmt;

/// Message returned for any failed login
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message returned when the movie search fails
pub const MOVIE_FETCH_FAILED: &str = "Error fetching movies";

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400), e.g. duplicate email
    BadRequest(String),

    /// Unknown email or wrong password (401). Both cases look the same.
    Unauthorized,

    /// Store, hashing or rendering failure (500)
    InternalError(String),

    /// OMDb unreachable or returned garbage (500)
    MovieFetch(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized: {}", INVALID_CREDENTIALS),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ApiError::MovieFetch(msg) => write!(f, "Movie fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS).into_response()
            }
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", msg)).into_response()
            }
            // Details were logged by the handler
            ApiError::MovieFetch(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MOVIE_FETCH_FAILED).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<OmdbError> for ApiError {
    fn from(err: OmdbError) -> Self {
        ApiError::MovieFetch(err.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::InternalError(format!("Template rendering failed: {}", err))
    }
}
