//! Demo action handler: full page for normal requests, bare fragment for pjax.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::context::ActionContext;
use crate::filter::PjaxRequest;

/// Ids are restricted to `[A-Za-z0-9_-]` by action resolution, so they need no escaping.
pub async fn action_page(
    ctx: Option<Extension<ActionContext>>,
    pjax: Option<Extension<PjaxRequest>>,
) -> Response {
    let Some(Extension(ctx)) = ctx else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let fragment = render_fragment(&ctx);

    match pjax {
        Some(Extension(PjaxRequest(true))) => Html(fragment).into_response(),
        _ => Html(render_layout(&ctx, &fragment)).into_response(),
    }
}

fn render_fragment(ctx: &ActionContext) -> String {
    format!(
        "<div id=\"pjax-container\" data-controller=\"{c}\" data-action=\"{a}\"><h1>{c}/{a}</h1></div>",
        c = ctx.controller_id,
        a = ctx.action_id
    )
}

fn render_layout(ctx: &ActionContext, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{}/{}</title></head><body>{body}</body></html>",
        ctx.controller_id, ctx.action_id
    )
}
