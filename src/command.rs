//! Wire commands
//!
//! A command is a single JSON object with a `cmd` discriminator and an
//! optional `payload` whose shape depends on the discriminator.

use serde::{Serialize, Serializer};

/// Command discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Heartbeat,
    Register,
    Login,
    Move,
    /// Any value outside the known vocabulary, sent verbatim
    Other(String),
}

impl CommandKind {
    /// Wire name of this command
    pub fn as_str(&self) -> &str {
        match self {
            CommandKind::Heartbeat => "HEARTBEAT",
            CommandKind::Register => "REGISTER",
            CommandKind::Login => "LOGIN",
            CommandKind::Move => "MOVE",
            CommandKind::Other(name) => name,
        }
    }
}

impl Serialize for CommandKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Command payload, serialized as a flat object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Credentials { username: String, password: String },
    Move { coord: String },
}

/// A command sent to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub cmd: CommandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Command {
    fn bare(cmd: CommandKind) -> Self {
        Self { cmd, payload: None }
    }

    pub fn heartbeat() -> Self {
        Self::bare(CommandKind::Heartbeat)
    }

    pub fn register(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            cmd: CommandKind::Register,
            payload: Some(Payload::Credentials {
                username: username.into(),
                password: password.into(),
            }),
        }
    }

    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            cmd: CommandKind::Login,
            payload: Some(Payload::Credentials {
                username: username.into(),
                password: password.into(),
            }),
        }
    }

    /// Attack a board coordinate such as "A5"
    pub fn attack(coord: impl Into<String>) -> Self {
        Self {
            cmd: CommandKind::Move,
            payload: Some(Payload::Move {
                coord: coord.into(),
            }),
        }
    }

    /// A command with an arbitrary discriminator and no payload
    pub fn other(name: impl Into<String>) -> Self {
        Self::bare(CommandKind::Other(name.into()))
    }

    /// Encode as compact JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode as UTF-8 wire bytes
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
