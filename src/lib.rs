//! Tokensum Server Library
//!
//! This module exposes the server components for testing purposes.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use actix_web::web;

use crate::config::Config;

/// Registers every route of the service on an `App`
pub fn configure_app(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.route("/", web::get().to(routes::ui::index))
        .route("/ui", web::get().to(routes::ui::index))
        .route("/ui/", web::get().to(routes::ui::index))
        .route("/ui/index.html", web::get().to(routes::ui::index))
        .route("/health", web::get().to(routes::health::liveness));
    routes::configure_api(cfg, config.json_body_limit);
}
