//! Request path -> (controller, action) resolution.

use std::sync::Arc;

use pjaxguard_core::policy::is_valid_id;

use crate::app_state::{AppState, ControllerRuntime};

/// Identifies the action a request is about to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    pub controller_id: String,
    pub action_id: String,
}

/// `/{controller}` runs the default action, `/{controller}/{action}[/...]` runs `action`.
///
/// Returns `None` for unknown controllers and malformed action ids; those
/// requests are not filtered.
pub fn resolve_action(
    state: &AppState,
    path: &str,
) -> Option<(ActionContext, Arc<ControllerRuntime>)> {
    let mut segments = path.trim_start_matches('/').split('/');
    let controller = state.controller(segments.next()?)?;

    let action_id = match segments.next() {
        None | Some("") => controller.default_action.clone(),
        Some(a) if is_valid_id(a) => a.to_string(),
        Some(_) => return None,
    };

    let ctx = ActionContext {
        controller_id: controller.id.clone(),
        action_id,
    };
    Some((ctx, controller))
}
