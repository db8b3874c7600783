//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `launcher`, `ui`) so components can depend on small
//! focused models. `catalog` holds the fixed engine list and sample panel
//! data. All transitions are plain methods so they can be tested without a
//! reactive runtime; components wrap the models in `RwSignal` contexts.

pub mod catalog;
pub mod chat;
pub mod launcher;
pub mod ui;
