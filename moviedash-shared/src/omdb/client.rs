/// OMDb HTTP client
///
/// Issues one `GET {base_url}/?s=<term>&apikey=<key>` per search. The whole
/// body is buffered before it is handed to `serde_json`, so a truncated
/// response surfaces as a parse error rather than a partial result.
///
/// # Example
///
/// ```no_run
/// use moviedash_shared::omdb::{MovieSearch, OmdbClient, OmdbConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OmdbClient::new(OmdbConfig::new("my-api-key"))?;
/// let results = client.search("batman").await?;
/// for movie in results.movies() {
///     println!("{} ({})", movie.title, movie.year);
/// }
/// # Ok(())
/// # }
/// ```

use super::types::SearchResponse;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, warn};

/// Public OMDb endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

/// Error type for movie searches
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    /// Connection, TLS or body-read failure
    #[error("OMDb request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Body was not valid JSON of the expected shape
    #[error("OMDb response could not be parsed: {0}")]
    Parse(#[source] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("OMDb client setup failed: {0}")]
    Setup(String),
}

/// Something that can search movies by title
#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// Searches titles matching `term`
    async fn search(&self, term: &str) -> Result<SearchResponse, OmdbError>;
}

/// Connection settings for OMDb
#[derive(Clone, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API key appended to every request
    pub api_key: String,

    /// Scheme and host, without the query
    pub base_url: String,
}

impl OmdbConfig {
    /// Settings for the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for OmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// [`MovieSearch`] backed by the OMDb REST API
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Builds a client with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns `OmdbError::Setup` if the TLS backend fails to initialize
    pub fn new(config: OmdbConfig) -> Result<Self, OmdbError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("moviedash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OmdbError::Setup(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl MovieSearch for OmdbClient {
    async fn search(&self, term: &str) -> Result<SearchResponse, OmdbError> {
        debug!(search = %term, "Querying OMDb");

        let response = self
            .http
            .get(self.config.search_url())
            .query(&[("s", term), ("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| OmdbError::Transport(e.without_url()))?;

        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|e| OmdbError::Transport(e.without_url()))?;

        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(search = %term, %status, body_len = body.len(), "OMDb returned unparseable body");
            OmdbError::Parse(e)
        })?;

        if let Some(error) = &parsed.error {
            debug!(search = %term, %status, error = %error, "OMDb reported no results");
        }

        Ok(parsed)
    }
}
