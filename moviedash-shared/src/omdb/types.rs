/// OMDb response types
///
/// Field names follow the OMDb wire format:
///
/// ```json
/// {
///   "Search": [
///     { "Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784",
///       "Type": "movie", "Poster": "https://..." }
///   ],
///   "totalResults": "571",
///   "Response": "True"
/// }
/// ```
///
/// A search with no hits comes back as
/// `{"Response": "False", "Error": "Movie not found!"}`.

use serde::{Deserialize, Serialize};

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,

    /// "movie", "series" or "episode"
    #[serde(rename = "Type", default)]
    pub kind: String,

    /// Poster URL, or "N/A"
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl Movie {
    /// Whether OMDb supplied a usable poster URL
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != "N/A"
    }
}

/// Envelope of a `?s=` search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<Movie>>,

    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,

    /// "True" or "False"
    #[serde(rename = "Response", default)]
    pub response: String,

    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Search hits, empty when OMDb returned none
    pub fn movies(&self) -> &[Movie] {
        self.search.as_deref().unwrap_or_default()
    }

    /// Consumes the envelope, returning the hits
    pub fn into_movies(self) -> Vec<Movie> {
        self.search.unwrap_or_default()
    }

    /// Whether the response carries no hits
    pub fn is_empty(&self) -> bool {
        self.movies().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_hits() {
        let body = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784",
                 "Type": "movie", "Poster": "https://example.com/p.jpg"}
            ],
            "totalResults": "571",
            "Response": "True"
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.movies().len(), 1);
        assert_eq!(parsed.movies()[0].title, "Batman Begins");
        assert_eq!(parsed.movies()[0].imdb_id, "tt0372784");
        assert_eq!(parsed.total_results.as_deref(), Some("571"));
        assert!(parsed.movies()[0].has_poster());
    }

    #[test]
    fn test_parse_not_found_envelope() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.error.as_deref(), Some("Movie not found!"));
        assert!(parsed.into_movies().is_empty());
    }

    #[test]
    fn test_missing_optional_movie_fields() {
        let body = r#"{"Search": [{"Title": "Untitled", "Poster": "N/A"}], "Response": "True"}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let movie = &parsed.movies()[0];
        assert_eq!(movie.year, "");
        assert!(!movie.has_poster());
    }
}
