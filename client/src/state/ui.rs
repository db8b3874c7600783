#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::catalog::ModelId;

/// UI state for the side panel and the reasoning-engine menu.
#[derive(Clone, Debug)]
pub struct UiState {
    pub context_panel_open: bool,
    pub model_menu_open: bool,
    pub selected_model: ModelId,
}

impl Default for UiState {
    fn default() -> Self {
        Self { context_panel_open: true, model_menu_open: false, selected_model: ModelId::default() }
    }
}

impl UiState {
    pub fn toggle_model_menu(&mut self) {
        self.model_menu_open = !self.model_menu_open;
    }

    /// Pick an engine and close the menu.
    pub fn select_model(&mut self, id: ModelId) {
        self.selected_model = id;
        self.model_menu_open = false;
    }

    pub fn close_context_panel(&mut self) {
        self.context_panel_open = false;
    }

    pub fn toggle_context_panel(&mut self) {
        self.context_panel_open = !self.context_panel_open;
    }
}
