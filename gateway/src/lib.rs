//! Shared call-gateway types for the console host and its UI.
//!
//! Every backend operation the UI can reach goes through one endpoint,
//! `POST /api/invoke/{command}`. The request body is the command's JSON
//! argument object, a success body is the command's JSON result, and a
//! failure body is an [`ErrorBody`]. This crate owns those shapes so the
//! `host` and `client` crates can never disagree about them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path prefix for gateway calls. The command name is appended.
pub const INVOKE_PATH: &str = "/api/invoke";

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned while decoding an inbound gateway call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The path named a command the host does not expose.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// The argument object did not match the command's argument type.
    #[error("invalid arguments for {command}: {reason}")]
    InvalidArgs { command: &'static str, reason: String },
}

/// Grepable error code attached to every failed gateway call.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

impl ErrorCode for GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "E_UNKNOWN_COMMAND",
            Self::InvalidArgs { .. } => "E_INVALID_ARGS",
        }
    }
}

/// JSON body returned with a non-2xx gateway response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    /// Build a body from any error carrying an [`ErrorCode`].
    pub fn from_error<E: ErrorCode>(err: &E) -> Self {
        Self { code: err.error_code().to_owned(), message: err.to_string() }
    }

    /// Message a caller should display for a failed call.
    ///
    /// Falls back to the HTTP status when the host sent no parseable body.
    #[must_use]
    pub fn client_message(status: u16, body: Option<Self>) -> String {
        match body {
            Some(body) if !body.message.is_empty() => body.message,
            _ => format!("gateway request failed: {status}"),
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Commands exposed through the call gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    GetSystemStatus,
    VaultMemory,
    InitializeSession,
    QueryHistory,
}

impl Command {
    pub const ALL: [Self; 4] = [Self::GetSystemStatus, Self::VaultMemory, Self::InitializeSession, Self::QueryHistory];

    /// Wire name used in the invoke path.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetSystemStatus => "get_system_status",
            Self::VaultMemory => "vault_memory",
            Self::InitializeSession => "initialize_session",
            Self::QueryHistory => "query_history",
        }
    }

    /// Parse a wire name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownCommand`] for names outside [`Command::ALL`].
    pub fn parse(name: &str) -> Result<Self, GatewayError> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| GatewayError::UnknownCommand(name.to_owned()))
    }

    /// Full request path for this command.
    #[must_use]
    pub fn path(self) -> String {
        format!("{INVOKE_PATH}/{}", self.as_str())
    }
}

/// Decode a command's argument object. A `null` body counts as `{}`.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidArgs`] when the value does not fit `T`.
pub fn decode_args<T: DeserializeOwned>(command: Command, value: Value) -> Result<T, GatewayError> {
    let value = if value.is_null() { Value::Object(serde_json::Map::new()) } else { value };
    serde_json::from_value(value)
        .map_err(|e| GatewayError::InvalidArgs { command: command.as_str(), reason: e.to_string() })
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Arguments for [`Command::VaultMemory`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMemoryArgs {
    pub content: String,
}

/// Arguments for [`Command::QueryHistory`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryHistoryArgs {
    #[serde(default)]
    pub limit: i32,
}

/// Arguments for commands that take none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoArgs {}

/// Lock state of the host vault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultStatus {
    #[default]
    Locked,
    Unlocked,
}

/// Result of [`Command::GetSystemStatus`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub vault_status: VaultStatus,
    pub active_identity: Option<String>,
    pub enclave_connection: bool,
    pub security_level: String,
}

/// One entry of [`Command::QueryHistory`]'s result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationItem {
    pub id: String,
    pub content: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
