//! Call gateway: the one way the UI reaches the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` to
//! `POST /api/invoke/{command}`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. The error string is the host's
//! `ErrorBody` message when one was sent, so callers can show it verbatim
//! (`Error: {message}`) without crashing hydration.

#![allow(clippy::unused_async)]

use gateway::{Command, ConversationItem, NoArgs, QueryHistoryArgs, SystemStatus, VaultMemoryArgs};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Invoke a host command with JSON arguments and decode its JSON result.
///
/// # Errors
///
/// Returns the host's error message, a transport error, or
/// `"not available on server"` during SSR.
pub async fn invoke<A, T>(command: Command, args: &A) -> Result<T, String>
where
    A: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&command.path())
            .json(args)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<gateway::ErrorBody>().await.ok();
            return Err(gateway::ErrorBody::client_message(resp.status(), body));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (command, args);
        Err("not available on server".to_owned())
    }
}

/// Fetch host status via `get_system_status`.
///
/// # Errors
///
/// See [`invoke`].
pub async fn get_system_status() -> Result<SystemStatus, String> {
    invoke(Command::GetSystemStatus, &NoArgs {}).await
}

/// Hand a message to the host via `vault_memory`; the reply string is shown
/// as the assistant's answer.
///
/// # Errors
///
/// See [`invoke`].
pub async fn vault_memory(content: &str) -> Result<String, String> {
    invoke(Command::VaultMemory, &VaultMemoryArgs { content: content.to_owned() }).await
}

/// Unlock the host vault via `initialize_session`.
///
/// # Errors
///
/// See [`invoke`].
pub async fn initialize_session() -> Result<String, String> {
    invoke(Command::InitializeSession, &NoArgs {}).await
}

/// Fetch recent vaulted memories, newest first.
///
/// # Errors
///
/// See [`invoke`].
pub async fn query_history(limit: i32) -> Result<Vec<ConversationItem>, String> {
    invoke(Command::QueryHistory, &QueryHistoryArgs { limit }).await
}
