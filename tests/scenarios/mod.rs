//! Per-scenario tests
//!
//! Each standard scenario run on its own against purpose-built servers:
//! - Liveness: probe against listening and closed ports
//! - Commands: marker matching for the command exchanges
//! - Banner: listen-only welcome check

pub mod banner;
pub mod liveness;

use shipcheck::{Client, Reporter, Scenario};

/// Run standard scenario `number` (1-based), returning verdict and output
pub async fn run_one(client: &Client, number: usize) -> (bool, String) {
    let scenario: Scenario = Scenario::standard()
        .into_iter()
        .nth(number - 1)
        .expect("no such scenario");
    let mut reporter = Reporter::new(Vec::new());
    let passed = scenario
        .run(client, &mut reporter, number)
        .await
        .expect("report write failed");
    let out = String::from_utf8(reporter.into_inner()).expect("report is not UTF-8");
    (passed, out)
}
