pub mod composer;
pub mod context_panel;
pub mod sidebar;
pub mod status_bar;
pub mod transcript;
