//! pjaxguard gateway library entry.
//!
//! Loads the YAML config, compiles one `ActionPjaxGuard` per controller, and
//! wires the pjax filter middleware into an axum router. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod filter;
pub mod ops;
pub mod pages;
pub mod router;
