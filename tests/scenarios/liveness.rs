//! Liveness probe scenario tests

use super::run_one;
use crate::harness::{unused_port, MockServer};
use colored::Colorize;
use shipcheck::report::{FAIL, PASS};
use shipcheck::{Client, HarnessConfig};

#[tokio::test]
async fn test_probe_passes_when_listening() {
    let server = MockServer::battleship().await.expect("Failed to start server");
    let client = Client::new(server.config());

    let (passed, out) = run_one(&client, 1).await;

    assert!(passed);
    assert!(out.starts_with("Test 1: Checking if server is running... "));
    assert!(out.contains(&PASS.bright_green().to_string()));
    // Probes never send a command
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn test_probe_fails_with_hint() {
    let port = unused_port().expect("no free port");
    let client = Client::new(HarnessConfig::new("127.0.0.1", port));

    let (passed, out) = run_one(&client, 1).await;

    assert!(!passed);
    assert!(out.contains(&FAIL.bright_red().to_string()));
    assert!(out.contains("Start it with: ./server"));
}
