//! # MovieDash Shared Library
//!
//! This crate contains the building blocks used by the MovieDash web server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing and verification
//! - `db`: PostgreSQL connection pool and migrations
//! - `models`: User records and their SQL operations
//! - `store`: The `UserStore` abstraction with PostgreSQL and in-memory backends
//! - `omdb`: Client for the OMDb movie search API

pub mod auth;
pub mod db;
pub mod models;
pub mod omdb;
pub mod store;

/// Current version of the MovieDash shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
