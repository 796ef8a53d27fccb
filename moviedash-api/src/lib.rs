//! # MovieDash Web Server Library
//!
//! Signup and login against a user store, plus a dashboard that proxies OMDb
//! movie searches.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Response security headers
//! - `routes`: Route handlers
//! - `views`: Askama page templates

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod views;
