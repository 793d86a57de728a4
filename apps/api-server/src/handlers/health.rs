//! Health check endpoint.

use actix_web::HttpResponse;

/// Liveness probe - plain text, no store access.
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
