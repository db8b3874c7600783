//! Call gateway endpoint.
//!
//! `POST /api/invoke/{command}` decodes the command name and its JSON
//! argument object, runs the command against the vault, and replies with
//! the command's JSON result or an [`ErrorBody`].

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use gateway::{
    Command, ErrorBody, ErrorCode, GatewayError, NoArgs, QueryHistoryArgs, VaultMemoryArgs, decode_args,
};
use serde_json::Value;

use crate::services::vault::VaultError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ErrorCode for InvokeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Gateway(e) => e.error_code(),
            Self::Vault(e) => e.error_code(),
            Self::Encode(_) => "E_ENCODE",
        }
    }
}

pub(crate) fn invoke_error_to_status(err: &InvokeError) -> StatusCode {
    match err {
        InvokeError::Gateway(GatewayError::UnknownCommand(_)) => StatusCode::NOT_FOUND,
        InvokeError::Gateway(GatewayError::InvalidArgs { .. }) | InvokeError::Vault(VaultError::EmptyPayload) => {
            StatusCode::BAD_REQUEST
        }
        InvokeError::Vault(VaultError::Locked) => StatusCode::LOCKED,
        InvokeError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Parse a raw request body. An empty body is treated as `null`.
fn parse_body(command: Command, body: &[u8]) -> Result<Value, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| GatewayError::InvalidArgs { command: command.as_str(), reason: e.to_string() })
}

/// Run one command against the shared state.
pub async fn dispatch(state: &AppState, command: Command, args: Value) -> Result<Value, InvokeError> {
    match command {
        Command::GetSystemStatus => {
            let _: NoArgs = decode_args(command, args)?;
            let status = state.vault.read().await.system_status(&state.config);
            Ok(serde_json::to_value(status)?)
        }
        Command::VaultMemory => {
            let args: VaultMemoryArgs = decode_args(command, args)?;
            let now = time::OffsetDateTime::now_utc().unix_timestamp();
            let mut vault = state.vault.write().await;
            let reply = vault.store(&args.content, now)?;
            tracing::debug!(bytes_vaulted = vault.metrics().bytes_vaulted, "vault metrics");
            Ok(Value::String(reply))
        }
        Command::InitializeSession => {
            let _: NoArgs = decode_args(command, args)?;
            let reply = state.vault.write().await.initialize_session();
            Ok(Value::String(reply))
        }
        Command::QueryHistory => {
            let args: QueryHistoryArgs = decode_args(command, args)?;
            let items = state.vault.read().await.history(args.limit);
            tracing::debug!(count = items.len(), "history queried");
            Ok(serde_json::to_value(items)?)
        }
    }
}

async fn run(state: &AppState, name: &str, body: &[u8]) -> Result<Value, InvokeError> {
    let command = Command::parse(name)?;
    let args = parse_body(command, body)?;
    dispatch(state, command, args).await
}

/// `POST /api/invoke/:command` — run one gateway command.
pub async fn invoke(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<ErrorBody>)> {
    run(&state, &name, &body).await.map(Json).map_err(|err| {
        let status = invoke_error_to_status(&err);
        tracing::warn!(command = %name, code = err.error_code(), error = %err, "invoke failed");
        (status, Json(ErrorBody::from_error(&err)))
    })
}

#[cfg(test)]
#[path = "invoke_test.rs"]
mod tests;
