//! pjaxguard core: the pjax action guard, its policy types, and the error surface.
//!
//! This crate decides, per action invocation, whether to allow it, redirect it,
//! or reject it. It carries no HTTP or runtime dependencies; issuing the actual
//! redirect or error response is the caller's job.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad configuration surfaces as `GuardError`/`Result` at load time.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod guard;
pub mod policy;
pub mod reaction;

/// Shared result type.
pub use error::{GuardError, Result};
pub use guard::{ActionPjaxGuard, Decision};
pub use policy::{ActionPolicy, ExclusionSet, WILDCARD};
pub use reaction::{ErrorSpec, Reaction, ReactionSpec, RedirectSpec, RedirectTarget};
