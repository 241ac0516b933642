//! HTTP handlers and route configuration.

mod health;
mod polls;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies get the same problem-details shape as other errors.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/polls")
                    .route("", web::get().to(polls::index))
                    .route("", web::post().to(polls::create))
                    .route("/{question_id}", web::get().to(polls::detail))
                    .route("/{question_id}/results", web::get().to(polls::results))
                    .route("/{question_id}/vote", web::post().to(polls::vote)),
            ),
    );
}
