//! Integration tests for POST /api/v1/generate

use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use crate::common::{first_field_error, post_json, post_raw};

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

// =============================================================================
// Successful Generation
// =============================================================================

#[actix_web::test]
async fn test_generate_token_default() {
    let (status, body) = post_json("/generate", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token should be a string");
    assert_eq!(token.len(), 20);
}

#[actix_web::test]
async fn test_generate_token_null_length_uses_default() {
    let (status, body) = post_json("/generate", json!({ "length": null })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"].as_str().unwrap().len(), 20);
}

#[rstest]
#[case(1)]
#[case(32)]
#[case(64)]
#[case(88)]
#[case(89)]
#[case(127)]
#[case(128)]
#[actix_web::test]
async fn test_generate_token_custom_length(#[case] length: usize) {
    let (status, body) = post_json("/generate", json!({ "length": length })).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.chars().count(), length);
    assert!(token.chars().all(is_base64_char));
}

#[actix_web::test]
async fn test_generate_token_is_random() {
    let (_, first) = post_json("/generate", json!({ "length": 32 })).await;
    let (_, second) = post_json("/generate", json!({ "length": 32 })).await;

    assert_ne!(first["token"], second["token"]);
}

#[actix_web::test]
async fn test_generate_token_ignores_unknown_fields() {
    let (status, body) = post_json("/generate", json!({ "length": 8, "extra": true })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"].as_str().unwrap().len(), 8);
}

// =============================================================================
// Structural Rejection
// =============================================================================

#[rstest]
#[case(0)]
#[case(129)]
#[case(-1)]
#[case(10_000)]
#[actix_web::test]
async fn test_generate_token_length_out_of_range(#[case] length: i64) {
    let (status, body) = post_json("/generate", json!({ "length": length })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "UnprocessableEntity");
    let field = first_field_error(&body);
    assert_eq!(field["field"], "length");
    assert_eq!(field["constraint"], "range");
}

#[rstest]
#[case(json!({ "length": "ten" }))]
#[case(json!({ "length": 3.5 }))]
#[case(json!({ "length": [20] }))]
#[case(json!({ "length": true }))]
#[actix_web::test]
async fn test_generate_token_length_not_integer(#[case] body: serde_json::Value) {
    let (status, body) = post_json("/generate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(first_field_error(&body)["constraint"], "type");
}

#[actix_web::test]
async fn test_generate_token_requires_json_content_type() {
    let (status, body) = post_raw("/generate", "text/plain", "{}".to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(first_field_error(&body)["constraint"], "content_type");
}

#[actix_web::test]
async fn test_generate_token_malformed_json() {
    let (status, body) =
        post_raw("/generate", "application/json", "{\"length\": ".to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(first_field_error(&body)["constraint"], "json");
}
