//! Scenario runner
//!
//! Runs scenarios strictly in order on the calling task, pausing between
//! them, and folds the verdicts into a [`Summary`].

use std::io::{self, Write};

use tracing::info;

use crate::report::Reporter;
use crate::scenario::Scenario;
use crate::transport::Client;

/// Pass/fail tally of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: 0 iff nothing failed
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Sequential scenario runner
pub struct Runner<W: Write> {
    client: Client,
    reporter: Reporter<W>,
}

impl<W: Write> Runner<W> {
    pub fn new(client: Client, reporter: Reporter<W>) -> Self {
        Self { client, reporter }
    }

    /// Run every scenario in order and print the summary block
    pub async fn run(&mut self, scenarios: &[Scenario]) -> io::Result<Summary> {
        let pause = self.client.config().pause;
        let mut summary = Summary::default();

        info!(
            addr = %self.client.config().addr(),
            scenarios = scenarios.len(),
            "starting run"
        );
        self.reporter.banner()?;

        for (index, scenario) in scenarios.iter().enumerate() {
            if index > 0 && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            let passed = scenario.run(&self.client, &mut self.reporter, index + 1).await?;
            summary.record(passed);
        }

        self.reporter.summary(&summary)?;
        info!(
            passed = summary.passed,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }
}
