/// Dashboard endpoint
///
/// ```text
/// GET /dashboard?search=<term>
/// ```
///
/// Every request goes to OMDb; results are never cached. An empty or absent
/// term searches for [`DEFAULT_SEARCH_TERM`]. When `search` is repeated, the
/// first occurrence wins.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    views::{self, DashboardPage},
};
use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::{error, info};

/// Term searched when the query has none
pub const DEFAULT_SEARCH_TERM: &str = "batman";

/// Dashboard query string
#[derive(Debug, Default)]
pub struct DashboardQuery {
    pub search: Option<String>,
}

impl DashboardQuery {
    /// Builds the query from raw key/value pairs, keeping the first `search`
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            search: pairs
                .into_iter()
                .find(|(key, _)| key == "search")
                .map(|(_, value)| value),
        }
    }

    /// The term to search, falling back to the default for blank input
    pub fn term(&self) -> &str {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .unwrap_or(DEFAULT_SEARCH_TERM)
    }
}

/// Renders search results
///
/// # Responses
///
/// - `200 OK` with the results, or with an empty list when OMDb found nothing
/// - `500 Internal Server Error`: `Error fetching movies`
pub async fn dashboard(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Html<String>> {
    let term = DashboardQuery::from_pairs(pairs).term().to_string();

    let results = state.movies.search(&term).await.map_err(|e| {
        error!(search = %term, error = %e, "Error fetching movies");
        ApiError::from(e)
    })?;

    let movies = results.into_movies();
    if movies.is_empty() {
        info!(search = %term, "No movies found");
    }

    views::render(&DashboardPage::new(term, movies))
}
