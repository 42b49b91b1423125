//! Per-action reactions: the raw config entry and its compiled form.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{GuardError, Result};

/// Raw per-action config entry, as written in YAML.
///
/// At most one of `redirect` / `error` may be set. Neither set compiles to
/// [`Reaction::Unset`] (a no-op) unless compilation is strict.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactionSpec {
    #[serde(default)]
    pub redirect: Option<RedirectSpec>,
    #[serde(default)]
    pub error: Option<ErrorSpec>,
}

/// Raw redirect target: either a literal `url` or a `route` plus query params.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectSpec {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

/// Raw HTTP error to fail with.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorSpec {
    pub code: u16,
    #[serde(default, alias = "msg")]
    pub message: String,
}

/// Where a rejected non-pjax invocation is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Literal URL, used verbatim.
    Url(String),
    /// Route descriptor; a bare name is relative to the owning controller.
    Route {
        route: String,
        params: BTreeMap<String, String>,
    },
}

impl RedirectTarget {
    /// Route target without query params.
    pub fn route(route: impl Into<String>) -> Self {
        RedirectTarget::Route {
            route: route.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        RedirectTarget::Url(url.into())
    }
}

/// Compiled reaction for one action key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Redirect(RedirectTarget),
    Error { code: u16, message: String },
    /// Neither redirect nor error configured; evaluates as Allow.
    Unset,
}

impl Reaction {
    /// Compile a raw entry for `action`.
    ///
    /// Rejects entries that set both redirect and error, redirect entries that
    /// name zero or two targets, and error codes outside 400..=599.
    pub fn compile(action: &str, spec: &ReactionSpec, strict: bool) -> Result<Self> {
        match (&spec.redirect, &spec.error) {
            (Some(_), Some(_)) => Err(GuardError::BadConfig(format!(
                "actions.{action}: redirect and error are mutually exclusive"
            ))),
            (Some(r), None) => compile_redirect(action, r).map(Reaction::Redirect),
            (None, Some(e)) => {
                if !(400..=599).contains(&e.code) {
                    return Err(GuardError::BadConfig(format!(
                        "actions.{action}: error.code must be between 400 and 599 (got {})",
                        e.code
                    )));
                }
                Ok(Reaction::Error {
                    code: e.code,
                    message: e.message.clone(),
                })
            }
            (None, None) => {
                if strict {
                    return Err(GuardError::BadConfig(format!(
                        "actions.{action}: neither redirect nor error configured"
                    )));
                }
                tracing::warn!(action = %action, "reaction has neither redirect nor error; action will be allowed");
                Ok(Reaction::Unset)
            }
        }
    }
}

fn compile_redirect(action: &str, r: &RedirectSpec) -> Result<RedirectTarget> {
    let fields = r
        .url
        .iter()
        .chain(r.route.iter())
        .chain(r.params.iter().flat_map(|(k, v)| [k, v]));
    for s in fields {
        if has_control_bytes(s) {
            return Err(GuardError::BadConfig(format!(
                "actions.{action}: redirect contains a control character: {s:?}"
            )));
        }
    }

    match (&r.url, &r.route) {
        (Some(url), None) => {
            if url.is_empty() {
                return Err(GuardError::BadConfig(format!(
                    "actions.{action}: redirect.url must not be empty"
                )));
            }
            if !r.params.is_empty() {
                return Err(GuardError::BadConfig(format!(
                    "actions.{action}: redirect.params only apply to redirect.route"
                )));
            }
            Ok(RedirectTarget::Url(url.clone()))
        }
        (None, Some(route)) => {
            if route.is_empty() {
                return Err(GuardError::BadConfig(format!(
                    "actions.{action}: redirect.route must not be empty"
                )));
            }
            Ok(RedirectTarget::Route {
                route: route.clone(),
                params: r.params.clone(),
            })
        }
        _ => Err(GuardError::BadConfig(format!(
            "actions.{action}: redirect needs exactly one of url or route"
        ))),
    }
}

/// Bytes that can never appear in a header value (the redirect is sent in one).
fn has_control_bytes(s: &str) -> bool {
    s.bytes().any(|b| b < 0x20 || b == 0x7f)
}
