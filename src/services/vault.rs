//! Memory vault: session lifecycle and the in-memory memory store.
//!
//! DESIGN
//! ======
//! The vault starts locked. `initialize_session` mints a session id and
//! unlocks it; every stored memory is tagged with the session that wrote it.
//! Memories are kept in insertion order and only ever appended.
//!
//! ERROR HANDLING
//! ==============
//! Empty payloads are rejected before the lock check so callers see the
//! same error whether or not a session exists.

use std::fmt::Write;

use gateway::{ConversationItem, ErrorCode, SystemStatus, VaultStatus};
use rand::Rng;
use uuid::Uuid;

use crate::config::HostConfig;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;
pub const MAX_HISTORY_LIMIT: usize = 200;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VaultError {
    #[error("Payload empty.")]
    EmptyPayload,
    #[error("VAULT_LOCKED: Please initialize session first.")]
    Locked,
}

impl ErrorCode for VaultError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => "E_EMPTY_PAYLOAD",
            Self::Locked => "E_VAULT_LOCKED",
        }
    }
}

/// A memory accepted by the vault.
#[derive(Debug, Clone)]
pub struct StoredMemory {
    pub id: Uuid,
    pub content: String,
    pub session_id: String,
    /// Seconds since the Unix epoch.
    pub stored_at: i64,
}

/// Running counters reported in logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaultMetrics {
    pub memories_stored: usize,
    pub bytes_vaulted: usize,
}

pub struct Vault {
    status: VaultStatus,
    session_id: Option<String>,
    active_identity: Option<String>,
    memories: Vec<StoredMemory>,
    metrics: VaultMetrics,
}

// =============================================================================
// SESSION
// =============================================================================

fn generate_session_id() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

impl Vault {
    #[must_use]
    pub fn new(active_identity: Option<String>) -> Self {
        Self {
            status: VaultStatus::Locked,
            session_id: None,
            active_identity,
            memories: Vec::new(),
            metrics: VaultMetrics::default(),
        }
    }

    #[must_use]
    pub fn status(&self) -> VaultStatus {
        self.status
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    #[must_use]
    pub fn metrics(&self) -> VaultMetrics {
        self.metrics
    }

    /// Unlock the vault, minting a session id on first use.
    pub fn initialize_session(&mut self) -> String {
        if self.session_id.is_none() {
            self.session_id = Some(generate_session_id());
            tracing::info!("vault session created");
        }
        self.status = VaultStatus::Unlocked;
        "Vault Unlocked".to_owned()
    }

    /// Snapshot for `get_system_status`.
    #[must_use]
    pub fn system_status(&self, config: &HostConfig) -> SystemStatus {
        SystemStatus {
            vault_status: self.status,
            active_identity: self.active_identity.clone(),
            enclave_connection: true,
            security_level: config.security_level.clone(),
        }
    }

    // =========================================================================
    // MEMORIES
    // =========================================================================

    /// Store one memory and return the reply line shown to the user.
    ///
    /// # Errors
    ///
    /// [`VaultError::EmptyPayload`] for blank content, [`VaultError::Locked`]
    /// when no session has been initialized.
    pub fn store(&mut self, content: &str, now: i64) -> Result<String, VaultError> {
        if content.trim().is_empty() {
            return Err(VaultError::EmptyPayload);
        }
        let session_id = match (self.status, self.session_id.as_ref()) {
            (VaultStatus::Unlocked, Some(id)) => id.clone(),
            _ => return Err(VaultError::Locked),
        };

        let memory = StoredMemory { id: Uuid::new_v4(), content: content.to_owned(), session_id, stored_at: now };
        let id = memory.id;
        tracing::debug!(%id, session = %memory.session_id, "storing memory");
        self.memories.push(memory);
        self.metrics.memories_stored += 1;
        self.metrics.bytes_vaulted += content.len();

        tracing::info!(%id, bytes = content.len(), total = self.metrics.memories_stored, "memory vaulted");
        Ok(format!("Stored successfully (ID: {id})"))
    }

    /// Most recent memories first. Non-positive limits use the default.
    #[must_use]
    pub fn history(&self, limit: i32) -> Vec<ConversationItem> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .min(MAX_HISTORY_LIMIT);

        self.memories
            .iter()
            .rev()
            .take(limit)
            .map(|m| ConversationItem { id: m.id.to_string(), content: m.content.clone(), timestamp: m.stored_at })
            .collect()
    }
}

#[cfg(test)]
#[path = "vault_test.rs"]
mod tests;
