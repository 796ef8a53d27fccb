/// Database models
///
/// - `user`: registered users and their SQL operations

pub mod user;
