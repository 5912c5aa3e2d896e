//! HTTP handlers and route configuration.

mod content;
mod health;

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Content routes
            .service(web::scope("/cms").route("/content", web::post().to(content::create_content))),
    );
}

/// JSON extractor settings. Payloads that cannot be read as a candidate
/// record are processing failures, not validation failures.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            AppError::Internal(format!("Unreadable payload on {}: {}", req.path(), err)).into()
        })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound)
}
