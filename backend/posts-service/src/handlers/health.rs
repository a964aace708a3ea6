/// Health check handlers
use crate::services::PostStore;
use actix_web::{web, HttpResponse};

/// Service summary: version and current post count
#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health_summary(store: web::Data<PostStore>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "posts-service",
        "version": env!("CARGO_PKG_VERSION"),
        "posts": store.len(),
    }))
}

#[utoipa::path(get, path = "/api/health/live", tag = "health", responses((status = 200, description = "Process is alive")))]
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
