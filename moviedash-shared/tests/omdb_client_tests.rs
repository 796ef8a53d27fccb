/// Integration tests for the OMDb client against a local mock server

use moviedash_shared::omdb::{MovieSearch, OmdbClient, OmdbConfig, OmdbError};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> OmdbClient {
    OmdbClient::new(OmdbConfig::new("test-key").with_base_url(server.uri()))
        .expect("client should build")
}

#[tokio::test]
async fn test_search_sends_term_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "the dark knight"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": [
                {"Title": "The Dark Knight", "Year": "2008", "imdbID": "tt0468569",
                 "Type": "movie", "Poster": "https://example.com/tdk.jpg"},
                {"Title": "The Dark Knight Rises", "Year": "2012", "imdbID": "tt1345836",
                 "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search("the dark knight")
        .await
        .expect("search should succeed");

    let titles: Vec<&str> = results.movies().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["The Dark Knight", "The Dark Knight Rises"]);
    assert_eq!(results.total_results.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_search_encodes_reserved_characters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("s", "fast & furious?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search("fast & furious?")
        .await
        .expect("search should succeed");

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_not_found_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search("zzzzzzzz")
        .await
        .expect("search should succeed");

    assert!(results.is_empty());
    assert_eq!(results.error.as_deref(), Some("Movie not found!"));
}

#[tokio::test]
async fn test_search_non_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("batman").await;
    assert!(matches!(result, Err(OmdbError::Parse(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_search_truncated_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Search": [{"Title": "Bat"#))
        .mount(&server)
        .await;

    let result = client_for(&server).search("batman").await;
    assert!(matches!(result, Err(OmdbError::Parse(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_search_unreachable_host_is_transport_error() {
    // Nothing listens on port 1
    let client = OmdbClient::new(OmdbConfig::new("test-key").with_base_url("http://127.0.0.1:1"))
        .expect("client should build");

    let result = client.search("batman").await;
    match result {
        Err(OmdbError::Transport(e)) => {
            assert!(!e.to_string().contains("test-key"), "error leaks api key: {}", e);
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}
