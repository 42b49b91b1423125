use std::collections::{BTreeMap, HashSet};
use std::net::SocketAddr;

use axum::http::HeaderName;
use serde::Deserialize;

use pjaxguard_core::error::{GuardError, Result};
use pjaxguard_core::policy::is_valid_id;
use pjaxguard_core::ReactionSpec;

/// Path segment reserved for the liveness endpoint.
const RESERVED_IDS: &[&str] = &["healthz"];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub pjax: PjaxSection,

    #[serde(default)]
    pub controllers: Vec<ControllerConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GuardError::UnsupportedVersion);
        }
        if self.controllers.is_empty() {
            return Err(GuardError::BadConfig("controllers must not be empty".into()));
        }

        self.server.validate()?;
        self.pjax.validate()?;

        let mut seen = HashSet::new();
        for c in &self.controllers {
            c.validate()?;
            if !seen.insert(c.id.as_str()) {
                return Err(GuardError::BadConfig(format!(
                    "duplicate controller id: {}",
                    c.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            GuardError::BadConfig(format!(
                "server.listen must be a valid socket address (got {})",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:8080".into()
}

/// How a pjax request is recognised.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PjaxSection {
    /// Header whose non-empty presence marks a pjax request.
    #[serde(default = "default_pjax_header")]
    pub header: String,

    /// Also require `X-Requested-With: XMLHttpRequest`.
    #[serde(default = "default_true")]
    pub require_ajax: bool,

    /// Reject reactions with neither redirect nor error at load time.
    #[serde(default)]
    pub strict_reactions: bool,
}

impl Default for PjaxSection {
    fn default() -> Self {
        Self {
            header: default_pjax_header(),
            require_ajax: true,
            strict_reactions: false,
        }
    }
}

impl PjaxSection {
    pub fn validate(&self) -> Result<()> {
        self.header_name().map(|_| ())
    }

    pub fn header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.header.as_bytes()).map_err(|_| {
            GuardError::BadConfig(format!("pjax.header is not a valid header name: {}", self.header))
        })
    }
}

fn default_pjax_header() -> String {
    "X-PJAX".into()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    pub id: String,

    #[serde(default = "default_action")]
    pub default_action: String,

    /// Action id (or `"*"`) -> reaction.
    #[serde(default)]
    pub actions: BTreeMap<String, ReactionSpec>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_id(&self.id) {
            return Err(GuardError::BadConfig(format!(
                "invalid controller id: {:?}",
                self.id
            )));
        }
        if RESERVED_IDS.contains(&self.id.as_str()) {
            return Err(GuardError::BadConfig(format!(
                "controller id is reserved: {}",
                self.id
            )));
        }
        if !is_valid_id(&self.default_action) {
            return Err(GuardError::BadConfig(format!(
                "controllers.{}.default_action is not a valid action id: {:?}",
                self.id, self.default_action
            )));
        }
        Ok(())
    }
}

fn default_action() -> String {
    "index".into()
}
