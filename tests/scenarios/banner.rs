//! Welcome banner scenario tests

use super::run_one;
use crate::harness::{replies, MockServer, Reply};
use shipcheck::Client;

#[tokio::test]
async fn test_banner_read_without_sending() {
    let server = MockServer::battleship().await.expect("Failed to start server");
    let client = Client::new(server.config());

    let (passed, out) = run_one(&client, 7).await;

    assert!(passed, "output: {}", out);
    assert!(out.starts_with("Test 7: Checking welcome message... "));
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn test_wrong_banner_prints_welcome_text() {
    let server = MockServer::start(replies::fixed("Welcome to some other server"))
        .await
        .expect("Failed to start server");
    let client = Client::new(server.config());

    let (passed, out) = run_one(&client, 7).await;

    assert!(!passed);
    assert!(out.contains("Welcome: Welcome to some other server"));
}

#[tokio::test]
async fn test_closed_connection_is_empty_text() {
    let server = MockServer::start(|_| Reply::Close)
        .await
        .expect("Failed to start server");
    let client = Client::new(server.config());

    let (passed, out) = run_one(&client, 7).await;

    assert!(!passed);
    assert!(out.ends_with("Welcome: \n"));
}
