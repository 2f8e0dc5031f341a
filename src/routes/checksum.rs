use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::models::ChecksumRequest;
use crate::services::ChecksumService;
use crate::validation::ValidatedJson;

/// POST /api/v1/checksum - Hash text with md5, sha1 or sha256
pub async fn checksum(body: ValidatedJson<ChecksumRequest>) -> AppResult<HttpResponse> {
    let response = ChecksumService::compute(&body.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure checksum routes (mounted inside the API scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/checksum", web::post().to(checksum));
}
