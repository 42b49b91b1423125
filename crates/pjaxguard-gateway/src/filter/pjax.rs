//! Pjax / ajax request detection.

use axum::http::{HeaderMap, HeaderName};

use pjaxguard_core::Result;

use crate::config::PjaxSection;

const X_REQUESTED_WITH: &str = "x-requested-with";

/// `X-Requested-With: XMLHttpRequest`.
pub fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get(X_REQUESTED_WITH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "XMLHttpRequest")
}

#[derive(Debug, Clone)]
pub struct PjaxDetector {
    header: HeaderName,
    require_ajax: bool,
}

impl PjaxDetector {
    pub fn new(header: HeaderName, require_ajax: bool) -> Self {
        Self {
            header,
            require_ajax,
        }
    }

    pub fn from_config(cfg: &PjaxSection) -> Result<Self> {
        Ok(Self::new(cfg.header_name()?, cfg.require_ajax))
    }

    /// Pjax header present (any value, even empty), plus the ajax marker unless that is switched off.
    pub fn is_pjax(&self, headers: &HeaderMap) -> bool {
        headers.contains_key(&self.header) && (!self.require_ajax || is_ajax(headers))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut h = HeaderMap::new();
        for (k, v) in pairs {
            h.insert(*k, HeaderValue::from_static(*v));
        }
        h
    }

    fn detector(require_ajax: bool) -> PjaxDetector {
        PjaxDetector::new(HeaderName::from_static("x-pjax"), require_ajax)
    }

    #[test]
    fn pjax_needs_ajax_by_default() {
        let d = detector(true);
        assert!(d.is_pjax(&headers(&[
            ("x-pjax", "true"),
            ("x-requested-with", "XMLHttpRequest")
        ])));
        assert!(!d.is_pjax(&headers(&[("x-pjax", "true")])));
        assert!(!d.is_pjax(&headers(&[("x-requested-with", "XMLHttpRequest")])));
    }

    #[test]
    fn header_presence_is_enough() {
        let d = detector(false);
        assert!(d.is_pjax(&headers(&[("x-pjax", "")])));
        assert!(d.is_pjax(&headers(&[("x-pjax", "true")])));
        assert!(!d.is_pjax(&HeaderMap::new()));
    }

    #[test]
    fn ajax_marker_is_exact() {
        assert!(is_ajax(&headers(&[("x-requested-with", "XMLHttpRequest")])));
        assert!(!is_ajax(&headers(&[("x-requested-with", "fetch")])));
        assert!(!is_ajax(&HeaderMap::new()));
    }
}
