//! Common test utilities for integration tests
//!
//! - In-memory user store shared with the router
//! - Canned and failing movie search backends
//! - A user store that always fails
//! - Request helpers

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use moviedash_api::{
    app::{build_router, AppState},
    config::ServerConfig,
};
use moviedash_shared::{
    auth::password::{PasswordConfig, MIN_BCRYPT_COST},
    models::user::{CreateUser, User},
    omdb::{Movie, MovieSearch, OmdbError, SearchResponse},
    store::{MemoryUserStore, StoreError, StoreResult, UserStore},
};
use std::sync::{Arc, Mutex};
use tower::Service as _;

/// Test context containing the router and the fakes behind it
pub struct TestContext {
    pub app: Router,
    pub users: Arc<MemoryUserStore>,
    pub movies: Arc<StubMovieSearch>,
}

impl TestContext {
    /// Empty store, canned movie results
    pub fn new() -> Self {
        Self::with_movies(StubMovieSearch::with_results(vec![
            movie("Batman Begins", "tt0372784"),
            movie("The Batman", "tt1877830"),
        ]))
    }

    /// Empty store, given movie backend
    pub fn with_movies(movies: StubMovieSearch) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let movies = Arc::new(movies);
        let state = AppState::new(users.clone(), movies.clone(), fast_passwords());
        let app = build_router(state, &ServerConfig::default());

        Self { app, users, movies }
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(form_request(uri, body)).await
    }
}

/// Router whose store fails every call
pub fn failing_store_app() -> Router {
    let state = AppState::new(
        Arc::new(FailingUserStore),
        Arc::new(StubMovieSearch::with_results(Vec::new())),
        fast_passwords(),
    );
    build_router(state, &ServerConfig::default())
}

/// Lowest bcrypt cost, keeps tests quick
pub fn fast_passwords() -> PasswordConfig {
    PasswordConfig::bcrypt(MIN_BCRYPT_COST)
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

pub fn movie(title: &str, imdb_id: &str) -> Movie {
    Movie {
        title: title.to_string(),
        year: "2005".to_string(),
        imdb_id: imdb_id.to_string(),
        kind: "movie".to_string(),
        poster: "N/A".to_string(),
    }
}

/// How the stub answers
pub enum StubBehavior {
    Results(Vec<Movie>),
    NotFound,
    ParseFailure,
}

/// Movie search that records every term it was asked for
pub struct StubMovieSearch {
    behavior: StubBehavior,
    terms: Mutex<Vec<String>>,
}

impl StubMovieSearch {
    pub fn with_results(movies: Vec<Movie>) -> Self {
        Self::new(StubBehavior::Results(movies))
    }

    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            terms: Mutex::new(Vec::new()),
        }
    }

    /// Terms searched so far
    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSearch for StubMovieSearch {
    async fn search(&self, term: &str) -> Result<SearchResponse, OmdbError> {
        self.terms.lock().unwrap().push(term.to_string());

        match &self.behavior {
            StubBehavior::Results(movies) => Ok(SearchResponse {
                search: Some(movies.clone()),
                total_results: Some(movies.len().to_string()),
                response: "True".to_string(),
                error: None,
            }),
            StubBehavior::NotFound => Ok(SearchResponse {
                search: None,
                total_results: None,
                response: "False".to_string(),
                error: Some("Movie not found!".to_string()),
            }),
            StubBehavior::ParseFailure => {
                let err = serde_json::from_str::<SearchResponse>("not json").unwrap_err();
                Err(OmdbError::Parse(err))
            }
        }
    }
}

/// User store whose backend is always down
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn find_by_email(&self, _email: &str) -> StoreResult<Vec<User>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _data: CreateUser) -> StoreResult<User> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
