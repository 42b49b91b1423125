pub mod action;

pub use action::{resolve_action, ActionContext};
