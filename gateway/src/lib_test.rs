use super::*;

// =============================================================================
// Command
// =============================================================================

#[test]
fn command_parse_accepts_every_wire_name() {
    for command in Command::ALL {
        assert_eq!(Command::parse(command.as_str()).expect("command"), command);
    }
}

#[test]
fn command_parse_rejects_unknown_name() {
    let err = Command::parse("toggle_launcher").unwrap_err();
    assert_eq!(err, GatewayError::UnknownCommand("toggle_launcher".to_owned()));
    assert_eq!(err.error_code(), "E_UNKNOWN_COMMAND");
}

#[test]
fn command_path_joins_invoke_prefix() {
    assert_eq!(Command::VaultMemory.path(), "/api/invoke/vault_memory");
    assert_eq!(Command::GetSystemStatus.path(), "/api/invoke/get_system_status");
}

// =============================================================================
// decode_args
// =============================================================================

#[test]
fn decode_args_reads_vault_content() {
    let args: VaultMemoryArgs =
        decode_args(Command::VaultMemory, serde_json::json!({ "content": "hello" })).expect("args");
    assert_eq!(args.content, "hello");
}

#[test]
fn decode_args_treats_null_as_empty_object() {
    let args: QueryHistoryArgs = decode_args(Command::QueryHistory, Value::Null).expect("args");
    assert_eq!(args.limit, 0);

    let _: NoArgs = decode_args(Command::GetSystemStatus, Value::Null).expect("no args");
}

#[test]
fn decode_args_reports_missing_field() {
    let err = decode_args::<VaultMemoryArgs>(Command::VaultMemory, serde_json::json!({})).unwrap_err();
    match err {
        GatewayError::InvalidArgs { command, reason } => {
            assert_eq!(command, "vault_memory");
            assert!(reason.contains("content"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// ErrorBody
// =============================================================================

#[test]
fn error_body_from_error_copies_code_and_message() {
    let body = ErrorBody::from_error(&GatewayError::UnknownCommand("nope".to_owned()));
    assert_eq!(body.code, "E_UNKNOWN_COMMAND");
    assert_eq!(body.message, "unknown command: nope");
}

#[test]
fn client_message_prefers_body_message() {
    let body = ErrorBody { code: "E_VAULT_LOCKED".to_owned(), message: "VAULT_LOCKED".to_owned() };
    assert_eq!(ErrorBody::client_message(423, Some(body)), "VAULT_LOCKED");
}

#[test]
fn client_message_falls_back_to_status() {
    assert_eq!(ErrorBody::client_message(502, None), "gateway request failed: 502");
    let empty = ErrorBody { code: String::new(), message: String::new() };
    assert_eq!(ErrorBody::client_message(500, Some(empty)), "gateway request failed: 500");
}

// =============================================================================
// Payload shapes
// =============================================================================

#[test]
fn system_status_serializes_vault_status_by_variant_name() {
    let status = SystemStatus {
        vault_status: VaultStatus::Unlocked,
        active_identity: None,
        enclave_connection: true,
        security_level: "MAXIMUM".to_owned(),
    };
    let json = serde_json::to_value(&status).expect("json");
    assert_eq!(json["vault_status"], "Unlocked");
    assert_eq!(json["active_identity"], Value::Null);
}
