/// Application state and router builder
///
/// The user store and movie client are injected into [`AppState`] rather than
/// living in globals, so tests can swap in fakes.
///
/// # Example
///
/// ```no_run
/// use moviedash_api::{app::{build_router, AppState}, config::Config};
/// use moviedash_shared::{omdb::OmdbClient, store::MemoryUserStore};
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(
///     Arc::new(MemoryUserStore::new()),
///     Arc::new(OmdbClient::new(config.omdb.clone())?),
///     config.password,
/// );
/// let app = build_router(state, &config.server);
/// # Ok(())
/// # }
/// ```

use crate::{config::ServerConfig, middleware::security::SecurityHeadersLayer};
use axum::{routing::get, Router};
use moviedash_shared::{auth::password::PasswordConfig, omdb::MovieSearch, store::UserStore};
use std::sync::Arc;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// User record collection
    pub users: Arc<dyn UserStore>,

    /// Movie search backend
    pub movies: Arc<dyn MovieSearch>,

    /// Parameters for hashing new passwords
    pub password: PasswordConfig,
}

impl AppState {
    /// Creates new application state
    pub fn new(
        users: Arc<dyn UserStore>,
        movies: Arc<dyn MovieSearch>,
        password: PasswordConfig,
    ) -> Self {
        Self {
            users,
            movies,
            password,
        }
    }
}

/// Builds the complete Axum router
///
/// ```text
/// /
/// ├── GET  /health
/// ├── GET  /signup       # signup form
/// ├── POST /signup       # create account, redirect to /login
/// ├── GET  /login        # login form
/// ├── POST /login        # check credentials, redirect to /dashboard
/// ├── GET  /dashboard    # ?search=<term>
/// └── *                  # static files from `server.static_dir`
/// ```
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    use crate::routes;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/signup",
            get(routes::auth::signup_form).post(routes::auth::signup),
        )
        .route(
            "/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route("/dashboard", get(routes::dashboard::dashboard))
        .fallback_service(ServeDir::new(&server.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SecurityHeadersLayer::new(server.production))
        .with_state(state)
}
