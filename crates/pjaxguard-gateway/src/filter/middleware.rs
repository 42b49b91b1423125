//! `from_fn_with_state` middleware running the guard before the action.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use pjaxguard_core::Decision;

use super::{pjax::is_ajax, redirect, response::HttpError};
use crate::app_state::AppState;
use crate::context::resolve_action;

/// Validity flag shared by guards running for the same action.
///
/// Earlier layers may insert `ActionValidity(false)`; a missing extension means valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionValidity(pub bool);

/// Whether the current request was recognised as pjax (set for allowed actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PjaxRequest(pub bool);

pub async fn pjax_filter(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some((ctx, controller)) = resolve_action(&state, req.uri().path()) else {
        return next.run(req).await;
    };

    let is_pjax = state.detector().is_pjax(req.headers());
    let valid = req
        .extensions()
        .get::<ActionValidity>()
        .map_or(true, |v| v.0);

    let decision = controller.guard().evaluate(&ctx.action_id, is_pjax, valid);
    tracing::debug!(
        controller = %ctx.controller_id,
        action = %ctx.action_id,
        is_pjax,
        ?decision,
        "pjax filter"
    );

    let decision = match decision.into_result() {
        Ok(decision) => decision,
        Err(rejected) => return HttpError::from(rejected).into_response(),
    };

    match decision {
        Decision::Allow(true) => {
            req.extensions_mut().insert(ActionValidity(true));
            req.extensions_mut().insert(PjaxRequest(is_pjax));
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Decision::Redirect(target) => {
            let url = redirect::resolve_url(&target, &ctx.controller_id);
            redirect::redirect_response(&url, is_ajax(req.headers()))
        }
        // Allow(false): invalidated upstream, the action does not run and renders nothing.
        // Fail was turned into an error response above.
        Decision::Allow(false) | Decision::Fail(..) => StatusCode::OK.into_response(),
    }
}
