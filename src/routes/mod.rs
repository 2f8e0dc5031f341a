pub mod checksum;
pub mod health;
pub mod tokens;
pub mod ui;

use actix_web::web;

use crate::error::{AppError, AppResult};
use crate::validation::json_config;

/// Versioned prefix for every API route
pub const API_PREFIX: &str = "/api/v1";

/// Configure the versioned API scope
pub fn configure_api(cfg: &mut web::ServiceConfig, json_body_limit: usize) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(json_config(json_body_limit))
            .configure(tokens::configure)
            .configure(checksum::configure)
            .default_service(web::to(api_not_found)),
    );
}

/// Fallback for unknown API paths
async fn api_not_found(req: actix_web::HttpRequest) -> AppResult<actix_web::HttpResponse> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
