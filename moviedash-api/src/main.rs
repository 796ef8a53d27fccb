//! # MovieDash Web Server
//!
//! Serves the signup/login forms and the movie search dashboard.
//!
//! ## Usage
//!
//! ```bash
//! OMDB_API_KEY=... cargo run -p moviedash-api
//! ```

use moviedash_api::{
    app::{build_router, AppState},
    config::Config,
};
use moviedash_shared::{
    db::{migrations::run_migrations, pool::create_pool},
    omdb::OmdbClient,
    store::{MemoryUserStore, PgUserStore, UserStore},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedash_api=debug,moviedash_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "MovieDash v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let users: Arc<dyn UserStore> = match &config.database {
        Some(database) => {
            let pool = create_pool(database.clone()).await?;
            run_migrations(&pool).await?;
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; user records will be kept in memory");
            Arc::new(MemoryUserStore::new())
        }
    };

    let movies = Arc::new(OmdbClient::new(config.omdb.clone())?);

    let state = AppState::new(users, movies, config.password);
    let app = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
