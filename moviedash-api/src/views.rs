/// Page templates
///
/// Templates live in `moviedash-api/templates/` and are compiled in by askama.

use crate::error::{ApiError, ApiResult};
use askama::Template;
use axum::response::Html;
use moviedash_shared::omdb::Movie;

/// Signup form
#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage {
    pub title: &'static str,
}

impl Default for SignupPage {
    fn default() -> Self {
        Self { title: "Sign up" }
    }
}

/// Login form
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub title: &'static str,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self { title: "Log in" }
    }
}

/// Dashboard with search box and results
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: &'static str,

    /// Term the results were fetched for
    pub search: String,

    /// Possibly empty
    pub movies: Vec<Movie>,
}

impl DashboardPage {
    pub fn new(search: String, movies: Vec<Movie>) -> Self {
        Self {
            title: "Dashboard",
            search,
            movies,
        }
    }
}

/// Renders a template into an HTML response body
///
/// # Errors
///
/// Returns `ApiError::InternalError` if rendering fails
pub fn render<T: Template>(template: &T) -> ApiResult<Html<String>> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Template rendering failed");
        ApiError::from(e)
    })
}
