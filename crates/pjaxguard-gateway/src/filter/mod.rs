//! Pjax filter: the axum integration around `ActionPjaxGuard`.
//!
//! Detects pjax requests, resolves the action, evaluates the guard, and turns
//! the decision into "run the action", a redirect, or an HTTP error.

pub mod middleware;
pub mod pjax;
pub mod redirect;
pub mod response;

pub use middleware::{pjax_filter, ActionValidity, PjaxRequest};
pub use pjax::PjaxDetector;
pub use response::HttpError;
