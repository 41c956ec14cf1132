//! Integration tests for the batch check driver.
//!
//! Uses unreachable loopback endpoints; a failed check must be recorded
//! per endpoint without stopping the batch.

use epg_coverage::cli::commands::check;
use epg_coverage::models::config::Config;

#[tokio::test]
async fn test_failing_endpoint_does_not_stop_the_batch() {
    // Nothing listens on these ports; both checks fail fast
    let config = Config {
        endpoints: vec![
            "http://127.0.0.1:1".to_string(),
            "http://127.0.0.1:2".to_string(),
        ],
        timeout_secs: 2,
        detailed: false,
    };

    let outcomes = check::check(&config).await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| !o.is_success()));
    assert_eq!(outcomes[0].endpoint, "http://127.0.0.1:1");
    assert_eq!(outcomes[1].endpoint, "http://127.0.0.1:2");
}
