//! Harness configuration
//!
//! Connection parameters and the fixed tuning constants of the harness.

use std::time::Duration;

/// Default target host
pub const DEFAULT_HOST: &str = "localhost";

/// Default target port
pub const DEFAULT_PORT: u16 = 8888;

/// Bound on each connect, write and read of an exchange
pub const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(2);

/// Bound on the liveness probe connect
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Pause inserted between consecutive scenarios
pub const SCENARIO_PAUSE: Duration = Duration::from_millis(100);

/// Maximum bytes accepted by the single receive of an exchange
pub const RECV_BUFFER_SIZE: usize = 4096;

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Server host name or address
    pub host: String,
    /// Server TCP port
    pub port: u16,
    /// Per-operation exchange timeout
    pub timeout: Duration,
    /// Liveness probe timeout
    pub probe_timeout: Duration,
    /// Delay between scenarios
    pub pause: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: EXCHANGE_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
            pause: SCENARIO_PAUSE,
        }
    }
}

impl HarnessConfig {
    /// Create a configuration for a specific endpoint, other values default
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the exchange timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the probe timeout
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the inter-scenario pause
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Get the target address as "host:port"
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
