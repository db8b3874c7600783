//! Network layer for the console UI.
//!
//! The UI never talks to the host except through the call gateway in `api`;
//! its request and response shapes come from the shared `gateway` crate.

pub mod api;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
