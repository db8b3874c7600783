use super::*;
use crate::state::test_helpers;

async fn call(state: &AppState, name: &str, body: &str) -> Result<Value, (StatusCode, ErrorBody)> {
    invoke(State(state.clone()), Path(name.to_owned()), Bytes::from(body.to_owned()))
        .await
        .map(|Json(v)| v)
        .map_err(|(status, Json(body))| (status, body))
}

// =============================================================================
// status mapping
// =============================================================================

#[test]
fn invoke_error_to_status_maps_unknown_command() {
    let err = InvokeError::Gateway(GatewayError::UnknownCommand("x".into()));
    assert_eq!(invoke_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn invoke_error_to_status_maps_vault_errors() {
    assert_eq!(invoke_error_to_status(&InvokeError::Vault(VaultError::EmptyPayload)), StatusCode::BAD_REQUEST);
    assert_eq!(invoke_error_to_status(&InvokeError::Vault(VaultError::Locked)), StatusCode::LOCKED);
}

#[test]
fn parse_body_blank_is_null() {
    assert_eq!(parse_body(Command::GetSystemStatus, b"").unwrap(), Value::Null);
    assert_eq!(parse_body(Command::GetSystemStatus, b"  \n").unwrap(), Value::Null);
}

#[test]
fn parse_body_rejects_malformed_json() {
    let err = parse_body(Command::VaultMemory, b"{not json").unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_ARGS");
}

// =============================================================================
// handler
// =============================================================================

#[tokio::test]
async fn get_system_status_reports_unlocked_vault() {
    let state = test_helpers::test_app_state();
    let value = call(&state, "get_system_status", "").await.expect("status");
    assert_eq!(value["vault_status"], "Unlocked");
    assert_eq!(value["enclave_connection"], true);
    assert_eq!(value["security_level"], "MAXIMUM");
}

#[tokio::test]
async fn vault_memory_returns_reply_string() {
    let state = test_helpers::test_app_state();
    let value = call(&state, "vault_memory", r#"{"content":"hello"}"#).await.expect("reply");
    let reply = value.as_str().expect("string reply");
    assert!(reply.starts_with("Stored successfully (ID: "));
    assert_eq!(state.vault.read().await.metrics().memories_stored, 1);
}

#[tokio::test]
async fn vault_memory_empty_payload_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, "vault_memory", r#"{"content":"   "}"#).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "E_EMPTY_PAYLOAD");
    assert_eq!(body.message, "Payload empty.");
}

#[tokio::test]
async fn vault_memory_locked_until_session_initialized() {
    let state = test_helpers::locked_app_state();

    let (status, body) = call(&state, "vault_memory", r#"{"content":"hi"}"#).await.unwrap_err();
    assert_eq!(status, StatusCode::LOCKED);
    assert_eq!(body.code, "E_VAULT_LOCKED");

    let unlocked = call(&state, "initialize_session", "{}").await.expect("unlock");
    assert_eq!(unlocked, Value::String("Vault Unlocked".to_owned()));

    call(&state, "vault_memory", r#"{"content":"hi"}"#).await.expect("stored after unlock");
}

#[tokio::test]
async fn query_history_returns_newest_first() {
    let state = test_helpers::test_app_state();
    call(&state, "vault_memory", r#"{"content":"first"}"#).await.unwrap();
    call(&state, "vault_memory", r#"{"content":"second"}"#).await.unwrap();

    let value = call(&state, "query_history", r#"{"limit":1}"#).await.expect("history");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["content"], "second");
}

#[tokio::test]
async fn unknown_command_is_not_found() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, "toggle_launcher", "").await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "E_UNKNOWN_COMMAND");
}

#[tokio::test]
async fn missing_argument_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, "vault_memory", "{}").await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "E_INVALID_ARGS");
}
