//! Integration Test Harness
//!
//! - `MockServer` - in-process BattleShip TCP server on a random port
//! - `replies` - canned responders mirroring the reference server
//! - `run_binary` - spawns the built shipcheck binary
//!
//! # Example
//!
//! ```rust,ignore
//! use harness::MockServer;
//!
//! #[tokio::test]
//! async fn test_heartbeat() {
//!     let server = MockServer::battleship().await.unwrap();
//!     let client = shipcheck::Client::new(server.config());
//!
//!     let resp = client.exchange(Some(&shipcheck::Command::heartbeat())).await;
//!     assert!(resp.contains("HEARTBEAT_ACK"));
//! }
//! ```

#![allow(dead_code, unused_imports)]

pub mod replies;

pub use binary::{find_binary_path, run_binary};
pub use server::{unused_port, MockServer, Reply};
