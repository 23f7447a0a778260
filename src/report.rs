//! Console report
//!
//! Fixed-format progress lines, colored verdicts and the summary block.

use std::io::{self, Write};

use colored::Colorize;

use crate::runner::Summary;
use crate::transport::Response;

/// Title printed at the top of every run
pub const TITLE: &str = "BattleShip Server Conformance Harness";

pub const PASS: &str = "✓ PASS";
pub const FAIL: &str = "✗ FAIL";

const RULE_WIDTH: usize = 50;

/// Writes the human-readable report
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "{}", TITLE)?;
        self.rule()?;
        writeln!(self.out)
    }

    /// Start a scenario line; the verdict completes it
    pub fn progress(&mut self, number: usize, title: &str) -> io::Result<()> {
        write!(self.out, "Test {}: {}... ", number, title)?;
        self.out.flush()
    }

    pub fn pass(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", PASS.bright_green())
    }

    pub fn fail(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", FAIL.bright_red())
    }

    /// Print the raw response for diagnosis
    pub fn detail(&mut self, label: &str, response: &Response) -> io::Result<()> {
        writeln!(self.out, "{}: {}", label, response)
    }

    pub fn hint(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.bright_yellow())
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(self.out, "Test Summary")?;
        self.rule()?;
        writeln!(self.out, "Total: {} tests", summary.total)?;
        writeln!(self.out, "{}", format!("Passed: {}", summary.passed).bright_green())?;
        if summary.failed > 0 {
            writeln!(self.out, "{}", format!("Failed: {}", summary.failed).bright_red())?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
