//! Integration tests module
//!
//! Drives the full application through actix-web's test service.

#[path = "../common/mod.rs"]
mod common;

mod concurrency_test;
mod generate_api_test;
