use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to every post at creation. No other transition exists.
pub const POST_STATUS_ACTIVE: &str = "active";

/// Post entity - a location-tagged community notice, as created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub contact: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection: exactly the columns the list query selects.
/// `user_id`, `status`, and any username are absent by construction,
/// which keeps the create/list field asymmetry structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub contact: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a post row. `status` and `created_at` are
/// server-assigned at insert time, never client-supplied.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub contact: String,
}
