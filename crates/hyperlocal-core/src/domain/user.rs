use serde::{Deserialize, Serialize};

/// User entity - represents a registered account.
///
/// The stored row also carries the password and a creation timestamp;
/// neither belongs to the domain entity, so neither can reach a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub rating: f64,
    pub rating_count: i32,
}

/// Input for creating a user row. Optional text fields are already
/// normalized to empty strings by the time this is built.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}
