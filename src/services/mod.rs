//! Domain services used by the gateway routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the host's state transitions so route handlers can
//! stay focused on decoding gateway calls and mapping errors to responses.

pub mod vault;
