/// OMDb movie search
///
/// - `client`: the [`MovieSearch`] trait and its reqwest-backed [`OmdbClient`]
/// - `types`: response envelope and search hits

pub mod client;
pub mod types;

pub use client::{MovieSearch, OmdbClient, OmdbConfig, OmdbError, DEFAULT_BASE_URL};
pub use types::{Movie, SearchResponse};
