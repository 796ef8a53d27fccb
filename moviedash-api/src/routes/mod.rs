/// Route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Signup and login forms and submissions
/// - `dashboard`: Movie search page

pub mod auth;
pub mod dashboard;
pub mod health;
