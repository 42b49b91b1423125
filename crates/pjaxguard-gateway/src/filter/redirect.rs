//! Redirect target -> URL, and the redirect response itself.

use std::collections::BTreeMap;

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use pjaxguard_core::{GuardError, RedirectTarget};

use super::response::HttpError;

/// Carries the redirect URL for ajax callers, which cannot follow `Location` themselves.
pub const X_REDIRECT: HeaderName = HeaderName::from_static("x-redirect");

/// Resolve a target for an action of `controller_id`.
///
/// A route with a leading `/` or any inner `/` is rooted at the site; a bare
/// name is an action of the same controller.
pub fn resolve_url(target: &RedirectTarget, controller_id: &str) -> String {
    match target {
        RedirectTarget::Url(url) => url.clone(),
        RedirectTarget::Route { route, params } => {
            let path = if route.starts_with('/') {
                route.clone()
            } else if route.contains('/') {
                format!("/{route}")
            } else {
                format!("/{controller_id}/{route}")
            };
            path + &query_string(params)
        }
    }
}

fn query_string(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// `302 Found`, with the URL in `X-Redirect` for ajax callers and `Location` otherwise.
pub fn redirect_response(url: &str, is_ajax: bool) -> Response {
    let value = match HeaderValue::from_str(url) {
        Ok(v) => v,
        Err(_) => {
            let err = GuardError::Internal(format!("redirect url is not a valid header value: {url}"));
            return HttpError::from(err).into_response();
        }
    };
    let name = if is_ajax { X_REDIRECT } else { header::LOCATION };
    (StatusCode::FOUND, [(name, value)]).into_response()
}
