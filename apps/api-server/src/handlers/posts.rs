//! Post handlers: the public listing and creation of notices.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, SecondsFormat, Utc};

use hyperlocal_core::domain::NewPost;
use hyperlocal_shared::dto::PostDto;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn instant_string(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /posts
///
/// Full-table listing in store order. The listing statement does not
/// select `user_id`, `status`, or a username, so those fields are null
/// in every entry - an intentional asymmetry from the create path.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let rows = state.posts.list().await?;

    let body: Vec<PostDto> = rows
        .into_iter()
        .map(|post| PostDto {
            id: Some(post.id),
            kind: Some(post.kind),
            title: Some(post.title),
            description: Some(post.description),
            contact: Some(post.contact),
            lat: Some(post.lat),
            lng: Some(post.lng),
            created_at: Some(instant_string(post.created_at)),
            ..Default::default()
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
///
/// Validates the required fields, inserts one row with server-assigned
/// `status` and `created_at`, and echoes the post back with the
/// generated id. `user_id` is not checked against the user table.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostDto>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = req.title.filter(|t| !t.trim().is_empty());
    let kind = req.kind.filter(|t| !t.trim().is_empty());

    let (Some(title), Some(kind), Some(lat), Some(lng), Some(user_id)) =
        (title, kind, req.lat, req.lng, req.user_id)
    else {
        return Err(AppError::BadRequest(
            "Missing required fields: userId, type, title, lat, lng".to_string(),
        ));
    };

    let post = state
        .posts
        .create(NewPost {
            user_id,
            kind,
            title,
            description: req.description.unwrap_or_default(),
            lat,
            lng,
            contact: req.contact.unwrap_or_default(),
        })
        .await?;

    Ok(HttpResponse::Created().json(PostDto {
        id: Some(post.id),
        user_id: Some(post.user_id),
        kind: Some(post.kind),
        title: Some(post.title),
        description: Some(post.description),
        lat: Some(post.lat),
        lng: Some(post.lng),
        contact: Some(post.contact),
        status: Some(post.status),
        created_at: Some(instant_string(post.created_at)),
        username: None,
    }))
}
