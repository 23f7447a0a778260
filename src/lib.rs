//! shipcheck - BattleShip TCP server conformance harness
//!
//! Connects to the game server once per scenario, sends JSON commands,
//! checks the raw replies for expected markers and reports a pass/fail
//! summary with an exit code usable by automation.

pub mod command;
pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod transport;

pub use command::{Command, CommandKind, Payload};
pub use config::HarnessConfig;
pub use report::Reporter;
pub use runner::{Runner, Summary};
pub use scenario::{Action, Scenario};
pub use transport::{Client, Response, TransportError};

use std::io::Write;

/// Run the standard checklist against `config`, writing the report to `out`
pub async fn run_standard<W: Write>(config: HarnessConfig, out: W) -> std::io::Result<Summary> {
    let mut runner = Runner::new(Client::new(config), Reporter::new(out));
    runner.run(&Scenario::standard()).await
}
