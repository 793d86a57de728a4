//! Authentication handlers: registration and login.

use actix_web::{HttpResponse, web};

use hyperlocal_core::domain::{NewUser, User};
use hyperlocal_shared::dto::{AuthRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        phone: user.phone,
        rating: user.rating,
        rating_count: user.rating_count,
    }
}

/// POST /auth/register
///
/// Inserts one user row with initial rating fields; the store assigns
/// the id. Duplicate emails surface as a plain 500, not a conflict.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<AuthRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(username), Some(email), Some(password)) = (req.username, req.email, req.password)
    else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    // Absent optional text fields are normalized to empty strings before
    // persistence, never stored as null.
    let phone = req.phone.unwrap_or_default();

    let user = state
        .users
        .create(NewUser {
            username,
            email,
            password,
            phone,
        })
        .await?;

    Ok(HttpResponse::Created().json(user_response(user)))
}

/// POST /auth/login
///
/// Exact email + password equality against the store. Zero matches is a
/// 401; with more than one candidate the first row the cursor yields wins.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<AuthRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::BadRequest("Missing email or password".to_string()));
    };

    match state.users.find_by_credentials(&email, &password).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user_response(user))),
        None => Err(AppError::Unauthorized),
    }
}
