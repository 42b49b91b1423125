//! The pjax action guard.
//!
//! `evaluate` is a pure function of its inputs plus the immutable policy:
//! callers issue the redirect or error response themselves.

use crate::error::{GuardError, Result};
use crate::policy::{ActionPolicy, ExclusionSet};
use crate::reaction::{Reaction, RedirectTarget};

/// Outcome of evaluating one action invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the action proceed; carries the (unchanged) validity flag.
    Allow(bool),
    /// Redirect the client and skip the action. Validity is false.
    Redirect(RedirectTarget),
    /// Abort the request with this HTTP status and message.
    Fail(u16, String),
}

impl Decision {
    /// Validity flag after the decision.
    pub fn is_valid(&self) -> bool {
        match self {
            Decision::Allow(valid) => *valid,
            Decision::Redirect(_) | Decision::Fail(..) => false,
        }
    }

    /// `Fail` becomes `GuardError::ActionRejected`; everything else passes through.
    pub fn into_result(self) -> Result<Decision> {
        match self {
            Decision::Fail(code, message) => Err(GuardError::ActionRejected { code, message }),
            other => Ok(other),
        }
    }
}

/// Decides allow / redirect / fail for actions invoked outside pjax.
/// Construct once at startup, then share via Arc.
#[derive(Debug, Clone, Default)]
pub struct ActionPjaxGuard {
    policy: ActionPolicy,
    exclude: ExclusionSet,
}

impl ActionPjaxGuard {
    pub fn new(policy: ActionPolicy, exclude: ExclusionSet) -> Self {
        Self { policy, exclude }
    }

    pub fn policy(&self) -> &ActionPolicy {
        &self.policy
    }

    pub fn exclude(&self) -> &ExclusionSet {
        &self.exclude
    }

    pub fn evaluate(&self, action_id: &str, is_pjax: bool, valid_so_far: bool) -> Decision {
        let Some(reaction) = self.policy.lookup(action_id) else {
            return Decision::Allow(valid_so_far);
        };

        if is_pjax || self.exclude.contains(action_id) {
            return Decision::Allow(valid_so_far);
        }

        match reaction {
            Reaction::Redirect(target) => Decision::Redirect(target.clone()),
            Reaction::Error { code, message } => Decision::Fail(*code, message.clone()),
            Reaction::Unset => Decision::Allow(valid_so_far),
        }
    }
}
