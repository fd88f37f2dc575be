//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add", web::post().to(posts::add))
        .route("/posts", web::get().to(posts::list))
        .route("/update/{id}", web::put().to(posts::update))
        .route("/delete/{id}", web::delete().to(posts::delete))
        .route("/health", web::get().to(health::health_check));
}
