//! Axum router wiring.
//!
//! Controller routes sit behind the pjax filter; `/healthz` does not.

use axum::{middleware, routing::{any, get}, Router};

use crate::{app_state::AppState, filter, ops, pages};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/:controller", any(pages::action_page))
        .route("/:controller/:action", any(pages::action_page))
        .route("/:controller/:action/*rest", any(pages::action_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), filter::pjax_filter))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
