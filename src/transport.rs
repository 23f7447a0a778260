//! Transport client
//!
//! Every exchange opens a fresh TCP connection, optionally writes one
//! encoded command, performs a single bounded read and closes the
//! connection. Failures are folded into a tagged [`Response`] instead of
//! being propagated, so one scenario can never abort the run.

use std::fmt;
use std::future::Future;
use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::command::Command;
use crate::config::{HarnessConfig, RECV_BUFFER_SIZE};

/// Sentinel rendered for a timed out exchange
pub const TIMEOUT_SENTINEL: &str = "TIMEOUT";

/// Sentinel rendered for a refused connection
pub const REFUSED_SENTINEL: &str = "CONNECTION_REFUSED";

/// Transport-level failure
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("timed out")]
    Timeout,

    #[error("connection refused")]
    Refused,

    #[error("{0}")]
    Io(io::Error),

    #[error("response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<io::Error> for TransportError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => TransportError::Refused,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportError::Timeout,
            _ => TransportError::Io(err),
        }
    }
}

/// Outcome of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Decoded server text, possibly empty
    Text(String),
    Timeout,
    Refused,
    /// Any other failure, with its description
    Error(String),
}

impl Response {
    /// True if this is server text containing `marker`.
    ///
    /// Failure outcomes never satisfy a marker.
    pub fn contains(&self, marker: &str) -> bool {
        match self {
            Response::Text(text) => text.contains(marker),
            _ => false,
        }
    }

    /// Server text, if the exchange succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            Response::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Text(text) => f.write_str(text),
            Response::Timeout => f.write_str(TIMEOUT_SENTINEL),
            Response::Refused => f.write_str(REFUSED_SENTINEL),
            Response::Error(description) => write!(f, "ERROR: {}", description),
        }
    }
}

impl From<TransportError> for Response {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => Response::Timeout,
            TransportError::Refused => Response::Refused,
            other => Response::Error(other.to_string()),
        }
    }
}

/// Run an I/O future under a deadline
async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, TransportError>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(TransportError::from),
        Err(_) => Err(TransportError::Timeout),
    }
}

/// TCP client for the game server
#[derive(Debug, Clone)]
pub struct Client {
    config: HarnessConfig,
}

impl Client {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Perform one exchange, sending `command` first if given
    pub async fn exchange(&self, command: Option<&Command>) -> Response {
        match self.try_exchange(command).await {
            Ok(text) => Response::Text(text),
            Err(e) => {
                debug!(addr = %self.config.addr(), error = %e, "exchange failed");
                Response::from(e)
            }
        }
    }

    /// Check whether anything is listening at the target address
    pub async fn probe(&self) -> bool {
        let addr = self.config.addr();
        match bounded(self.config.probe_timeout, TcpStream::connect(&addr)).await {
            Ok(stream) => {
                drop(stream);
                true
            }
            Err(e) => {
                debug!(addr = %addr, error = %e, "probe failed");
                false
            }
        }
    }

    async fn try_exchange(&self, command: Option<&Command>) -> Result<String, TransportError> {
        let addr = self.config.addr();
        let limit = self.config.timeout;

        let mut stream = bounded(limit, TcpStream::connect(&addr)).await?;

        if let Some(command) = command {
            let bytes = command.encode()?;
            debug!(
                addr = %addr,
                bytes = bytes.len(),
                "sending {}",
                String::from_utf8_lossy(&bytes)
            );
            bounded(limit, stream.write_all(&bytes)).await?;
        }

        // Single receive; anything past the buffer is dropped
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let n = bounded(limit, stream.read(&mut buf)).await?;
        buf.truncate(n);
        debug!(addr = %addr, bytes = n, "received");

        Ok(String::from_utf8(buf)?)
    }
}
