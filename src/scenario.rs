//! Protocol scenarios
//!
//! Each scenario performs exactly one probe or exchange and checks the
//! result against one marker. Scenarios hold no state and may be run in
//! any number of passes.

use std::io::{self, Write};

use tracing::debug;

use crate::command::Command;
use crate::report::Reporter;
use crate::transport::{Client, Response};

/// Hint printed when the liveness probe fails
pub const START_SERVER_HINT: &str = "Server is not running. Start it with: ./server";

/// What a scenario does with the connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Connect and close without exchanging data
    Probe,
    /// Send a command and read the reply
    Send(Command),
    /// Connect and read without sending
    Listen,
}

/// One protocol check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub action: Action,
    /// Substring the response must contain; unused by probes
    pub marker: &'static str,
}

impl Scenario {
    pub fn new(title: &'static str, action: Action, marker: &'static str) -> Self {
        Self {
            title,
            action,
            marker,
        }
    }

    /// The standard checklist, in required execution order.
    ///
    /// The banner check must stay last: it reads a fresh connection
    /// without sending anything.
    pub fn standard() -> Vec<Scenario> {
        vec![
            Scenario::new("Checking if server is running", Action::Probe, ""),
            Scenario::new(
                "Sending HEARTBEAT command",
                Action::Send(Command::heartbeat()),
                "HEARTBEAT_ACK",
            ),
            Scenario::new(
                "Sending REGISTER command",
                Action::Send(Command::register("test", "test123")),
                "REGISTER_RESPONSE",
            ),
            Scenario::new(
                "Sending LOGIN command",
                Action::Send(Command::login("admin", "admin123")),
                "LOGIN_RESPONSE",
            ),
            Scenario::new(
                "Sending MOVE command",
                Action::Send(Command::attack("A5")),
                "MOVE_RESULT",
            ),
            Scenario::new(
                "Sending unknown command",
                Action::Send(Command::other("UNKNOWN")),
                "Unknown command",
            ),
            Scenario::new(
                "Checking welcome message",
                Action::Listen,
                "Connected to BattleShip TCP Server",
            ),
        ]
    }

    /// Label used when printing the raw response of a failed check
    fn detail_label(&self) -> &'static str {
        match self.action {
            Action::Listen => "Welcome",
            _ => "Response",
        }
    }

    /// Run the scenario, printing its progress line and verdict
    pub async fn run<W: Write>(
        &self,
        client: &Client,
        reporter: &mut Reporter<W>,
        number: usize,
    ) -> io::Result<bool> {
        reporter.progress(number, self.title)?;

        let response = match &self.action {
            Action::Probe => {
                if client.probe().await {
                    reporter.pass()?;
                    return Ok(true);
                }
                reporter.fail()?;
                reporter.hint(START_SERVER_HINT)?;
                return Ok(false);
            }
            Action::Send(command) => client.exchange(Some(command)).await,
            Action::Listen => client.exchange(None).await,
        };

        self.evaluate(&response, reporter)
    }

    fn evaluate<W: Write>(
        &self,
        response: &Response,
        reporter: &mut Reporter<W>,
    ) -> io::Result<bool> {
        let passed = response.contains(self.marker);
        debug!(scenario = self.title, marker = self.marker, passed, "evaluated");

        if passed {
            reporter.pass()?;
        } else {
            reporter.fail()?;
            reporter.detail(self.detail_label(), response)?;
        }
        Ok(passed)
    }
}
