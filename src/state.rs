//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the host configuration and the vault. The vault sits behind a
//! single `RwLock`; handlers take the lock for the duration of one command.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::HostConfig;
use crate::services::vault::Vault;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub vault: Arc<RwLock<Vault>>,
}

impl AppState {
    /// Build state from config, unlocking the vault when `auto_unlock` is set.
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        let mut vault = Vault::new(config.identity.clone());
        if config.auto_unlock {
            vault.initialize_session();
        }
        Self { config: Arc::new(config), vault: Arc::new(RwLock::new(vault)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use gateway::VaultStatus;

    use super::*;

    #[tokio::test]
    async fn auto_unlock_initializes_session() {
        let state = test_helpers::test_app_state();
        let vault = state.vault.read().await;
        assert_eq!(vault.status(), VaultStatus::Unlocked);
        assert!(vault.session_id().is_some());
    }

    #[tokio::test]
    async fn auto_unlock_off_leaves_vault_locked() {
        let state = test_helpers::locked_app_state();
        assert_eq!(state.vault.read().await.status(), VaultStatus::Locked);
    }

    #[test]
    fn clones_share_the_vault() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.vault, &clone.vault));
    }
}
