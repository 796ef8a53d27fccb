/// Integration tests for the dashboard

mod common;

use axum::http::StatusCode;
use common::{body_string, movie, StubBehavior, StubMovieSearch, TestContext};

#[tokio::test]
async fn test_dashboard_renders_results() {
    let ctx = TestContext::new();

    let response = ctx.get("/dashboard?search=batman").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Batman Begins"));
    assert!(html.contains("The Batman"));
    assert!(html.contains("tt1877830"));
}

#[tokio::test]
async fn test_dashboard_without_search_matches_batman() {
    let ctx = TestContext::new();

    let default_page = body_string(ctx.get("/dashboard").await).await;
    let explicit_page = body_string(ctx.get("/dashboard?search=batman").await).await;

    assert_eq!(default_page, explicit_page);
    assert_eq!(ctx.movies.terms(), vec!["batman", "batman"]);
}

#[tokio::test]
async fn test_dashboard_empty_search_uses_default() {
    let ctx = TestContext::new();

    let response = ctx.get("/dashboard?search=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ctx.movies.terms(), vec!["batman"]);
}

#[tokio::test]
async fn test_dashboard_passes_decoded_term() {
    let ctx = TestContext::with_movies(StubMovieSearch::with_results(vec![movie(
        "Star Wars",
        "tt0076759",
    )]));

    let response = ctx.get("/dashboard?search=star%20wars").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ctx.movies.terms(), vec!["star wars"]);
}

#[tokio::test]
async fn test_dashboard_no_results_renders_empty_list() {
    let ctx = TestContext::with_movies(StubMovieSearch::new(StubBehavior::NotFound));

    let response = ctx.get("/dashboard?search=zzzzzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("No movies found"));
}

#[tokio::test]
async fn test_dashboard_empty_result_array_renders_empty_list() {
    let ctx = TestContext::with_movies(StubMovieSearch::with_results(Vec::new()));

    let response = ctx.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("No movies found"));
}

#[tokio::test]
async fn test_dashboard_client_failure_returns_500() {
    let ctx = TestContext::with_movies(StubMovieSearch::new(StubBehavior::ParseFailure));

    let response = ctx.get("/dashboard?search=batman").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Error fetching movies");
}

#[tokio::test]
async fn test_dashboard_repeated_search_uses_first() {
    let ctx = TestContext::new();

    let response = ctx.get("/dashboard?search=alien&search=aliens").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ctx.movies.terms(), vec!["alien"]);
}
