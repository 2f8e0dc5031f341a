use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::models::{TokenRequest, TokenResponse};
use crate::services::TokenService;
use crate::validation::ValidatedJson;

/// POST /api/v1/generate - Generate a random token
pub async fn generate_token(body: ValidatedJson<TokenRequest>) -> AppResult<HttpResponse> {
    let length = body.into_inner().effective_length();
    let token = TokenService::generate(length)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure token routes (mounted inside the API scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate_token));
}
