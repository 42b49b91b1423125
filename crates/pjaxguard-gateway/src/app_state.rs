//! Shared application state for the pjaxguard gateway.
//!
//! Compiles each controller's action policy into an `ActionPjaxGuard` once at
//! startup; request handling only reads it.

use std::collections::HashMap;
use std::sync::Arc;

use pjaxguard_core::error::{GuardError, Result};
use pjaxguard_core::{ActionPjaxGuard, ActionPolicy, ExclusionSet};

use crate::config::GatewayConfig;
use crate::filter::PjaxDetector;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    detector: PjaxDetector,
    controllers: HashMap<String, Arc<ControllerRuntime>>,
}

/// Compiled guard for one controller.
#[derive(Debug)]
pub struct ControllerRuntime {
    pub id: String,
    pub default_action: String,
    guard: ActionPjaxGuard,
}

impl ControllerRuntime {
    pub fn guard(&self) -> &ActionPjaxGuard {
        &self.guard
    }
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let strict = cfg.pjax.strict_reactions;
        let detector = PjaxDetector::from_config(&cfg.pjax)?;

        let mut controllers = HashMap::new();
        for c in &cfg.controllers {
            let policy = ActionPolicy::compile(&c.actions, strict).map_err(|e| {
                GuardError::BadConfig(format!(
                    "controller policy compile failed (controller={}): {e}",
                    c.id
                ))
            })?;

            let exclude: ExclusionSet = c.exclude.iter().cloned().collect();
            if policy.is_empty() && !exclude.is_empty() {
                tracing::warn!(controller = %c.id, "exclude is set but no actions are guarded");
            }
            tracing::debug!(
                controller = %c.id,
                guarded = c.actions.len(),
                excluded = exclude.len(),
                "controller guard compiled"
            );

            controllers.insert(
                c.id.clone(),
                Arc::new(ControllerRuntime {
                    id: c.id.clone(),
                    default_action: c.default_action.clone(),
                    guard: ActionPjaxGuard::new(policy, exclude),
                }),
            );
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                detector,
                controllers,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn detector(&self) -> &PjaxDetector {
        &self.inner.detector
    }

    pub fn controller(&self, id: &str) -> Option<Arc<ControllerRuntime>> {
        self.inner.controllers.get(id).cloned()
    }
}
