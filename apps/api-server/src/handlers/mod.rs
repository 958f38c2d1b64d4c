//! HTTP handlers and route configuration.

mod health;
mod posts;
mod settings;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list_by_time))
                    .route("/type/{type_id}", web::get().to(posts::list_by_type))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Reference data
            .service(
                web::scope("/settings")
                    .route("/types", web::get().to(settings::types))
                    .route("/locations", web::get().to(settings::locations)),
            ),
    );
}
