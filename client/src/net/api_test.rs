//! Without the `hydrate` feature every gateway call must fail softly so SSR
//! renders never panic.

use futures::executor::block_on;

use super::api;

#[test]
fn get_system_status_errors_on_server() {
    let err = block_on(api::get_system_status()).unwrap_err();
    assert_eq!(err, "not available on server");
}

#[test]
fn vault_memory_errors_on_server() {
    assert!(block_on(api::vault_memory("hello")).is_err());
}

#[test]
fn initialize_session_and_history_error_on_server() {
    assert!(block_on(api::initialize_session()).is_err());
    assert!(block_on(api::query_history(5)).is_err());
}
