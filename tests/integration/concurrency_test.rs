//! Concurrency tests for the request handlers' services
//!
//! Both operations are stateless, so many calls running at once on a
//! multi-threaded runtime must each produce an independent, correct result.

use std::collections::HashSet;

use tokensum::models::ChecksumRequest;
use tokensum::services::{ChecksumService, TokenService};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_token_generation() {
    let handles: Vec<_> = (0..64)
        .map(|_| tokio::spawn(async { TokenService::generate(40) }))
        .collect();

    let mut tokens = HashSet::new();
    for handle in handles {
        let token = handle.await.expect("task panicked").expect("generation failed");
        assert_eq!(token.len(), 40);
        tokens.insert(token);
    }

    assert_eq!(tokens.len(), 64, "concurrent tokens should all differ");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_checksums_agree() {
    let handles: Vec<_> = (0..64)
        .map(|_| {
            tokio::spawn(async {
                ChecksumService::compute(&ChecksumRequest {
                    text: "hello world".to_string(),
                    hash_type: Some("sha1".to_string()),
                })
            })
        })
        .collect();

    for handle in handles {
        let resp = handle.await.expect("task panicked").expect("checksum failed");
        assert_eq!(resp.checksum, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }
}
