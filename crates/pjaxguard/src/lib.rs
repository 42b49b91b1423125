//! Top-level facade crate for pjaxguard.
//!
//! Re-exports the decision core and the axum integration so users can depend on a single crate.

pub mod core {
    pub use pjaxguard_core::*;
}

pub mod gateway {
    pub use pjaxguard_gateway::*;
}
