//! End-to-end tests: router + pjax filter driven with `oneshot`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower::ServiceExt;

use pjaxguard_gateway::{
    app_state::AppState,
    config,
    filter::{redirect::X_REDIRECT, ActionValidity},
    router::build_router,
};

const CONFIG: &str = r#"
version: 1
controllers:
  - id: post
    actions:
      "*": { redirect: { route: index, params: { from: direct } } }
      delete: { error: { code: 404, message: "Page not found" } }
      view: {}
    exclude: [index]
  - id: site
    actions:
      error: { error: { code: 403 } }
"#;

fn app() -> Router {
    let cfg = config::load_from_str(CONFIG).unwrap();
    build_router(AppState::new(cfg).unwrap())
}

fn get(uri: &str) -> Request {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn pjax_get(uri: &str) -> Request {
    Request::builder()
        .uri(uri)
        .header("X-PJAX", "true")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(Body::empty())
        .unwrap()
}

async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn direct_hit_is_redirected() {
    let resp = app().oneshot(get("/post/update")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/post/index?from=direct"
    );
}

#[tokio::test]
async fn plain_ajax_hit_gets_x_redirect() {
    let req = Request::builder()
        .uri("/post/update")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(&X_REDIRECT).unwrap(), "/post/index?from=direct");
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn pjax_hit_renders_fragment() {
    let resp = app().oneshot(pjax_get("/post/update")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.starts_with("<div id=\"pjax-container\""));
    assert!(body.contains("post/update"));
}

#[tokio::test]
async fn pjax_header_without_ajax_is_not_pjax() {
    let req = Request::builder()
        .uri("/post/update")
        .header("X-PJAX", "true")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn empty_pjax_header_still_counts() {
    let req = Request::builder()
        .uri("/post/update")
        .header("X-PJAX", "")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.starts_with("<div id=\"pjax-container\""));
}

#[tokio::test]
async fn excluded_default_action_renders_full_page() {
    for uri in ["/post", "/post/index"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("post/index"));
    }
}

#[tokio::test]
async fn error_reaction_fails_with_status_and_message() {
    let resp = app().oneshot(get("/post/delete/7")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(resp).await, "Page not found");
}

#[tokio::test]
async fn error_without_message_uses_reason_phrase() {
    let resp = app().oneshot(get("/site/error")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(resp).await, "Forbidden");
}

#[tokio::test]
async fn unguarded_and_empty_reactions_pass() {
    let resp = app().oneshot(get("/site/about")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app().oneshot(get("/post/view")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("post/view"));
}

#[tokio::test]
async fn unknown_controller_is_not_found() {
    let resp = app().oneshot(get("/nope/update")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_not_filtered() {
    let resp = app().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}

async fn mark_invalid(mut req: Request, next: Next) -> Response {
    req.extensions_mut().insert(ActionValidity(false));
    next.run(req).await
}

#[tokio::test]
async fn invalidated_action_does_not_run() {
    let app = app().layer(middleware::from_fn(mark_invalid));

    let resp = app.clone().oneshot(pjax_get("/post/update")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "");

    // Redirect still wins over an upstream invalidation.
    let resp = app.oneshot(get("/post/update")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
}
