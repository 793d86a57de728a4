//! Data Transfer Objects - request/response types for the API.
//!
//! Every input field is optional so the handlers can tell an absent field
//! from a present one; unknown fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Body of both `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// A user as returned to clients. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub rating: f64,
    pub rating_count: i32,
}

/// The post entity as it crosses the HTTP boundary, in both directions.
///
/// On input only `userId`, `type`, `title`, `lat`, `lng` are required;
/// on output the fields a given path does not populate serialize as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub username: Option<String>,
}
