//! shipcheck - BattleShip TCP server conformance harness

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use shipcheck::config::{DEFAULT_HOST, DEFAULT_PORT};
use shipcheck::HarnessConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Conformance checks for the BattleShip TCP server
#[derive(Parser, Debug)]
#[command(name = "shipcheck", version, about = "Check a BattleShip TCP server")]
struct Args {
    /// Server host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Per-exchange timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shipcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Exit status is reserved for the verdict: 0 all passed, 1 otherwise
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let failed = e.use_stderr();
            let _ = e.print();
            std::process::exit(if failed { 1 } else { 0 });
        }
    };

    let mut config = HarnessConfig::new(args.host, args.port);
    if let Some(ms) = args.timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }

    let summary = shipcheck::run_standard(config, std::io::stdout()).await?;
    std::process::exit(summary.exit_code());
}
