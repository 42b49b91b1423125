//! Action policy and exclusion set.
//!
//! Compiled once from configuration, then read-only for the lifetime of the
//! owning controller.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{GuardError, Result};
use crate::reaction::{Reaction, ReactionSpec};

/// Policy key standing for every action without an explicit entry.
pub const WILDCARD: &str = "*";

/// Controller/action ids: `[A-Za-z0-9_-]+`, no leading or trailing dash.
pub fn is_valid_id(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Action id -> reaction, with an optional wildcard fallback.
#[derive(Debug, Clone, Default)]
pub struct ActionPolicy {
    exact: HashMap<String, Reaction>,
    wildcard: Option<Reaction>,
}

impl ActionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile raw config entries. `strict` turns empty entries into errors.
    pub fn compile(raw: &BTreeMap<String, ReactionSpec>, strict: bool) -> Result<Self> {
        let mut policy = Self::new();
        for (action, spec) in raw {
            if action.is_empty() {
                return Err(GuardError::BadConfig("action key must not be empty".into()));
            }
            if action != WILDCARD && !is_valid_id(action) {
                return Err(GuardError::BadConfig(format!(
                    "invalid action key: {action:?} (expected [A-Za-z0-9_-]+ or \"*\")"
                )));
            }
            let reaction = Reaction::compile(action, spec, strict)?;
            policy = policy.with(action.clone(), reaction);
        }
        Ok(policy)
    }

    /// Add (or replace) the reaction for `action`; `"*"` sets the wildcard.
    pub fn with(mut self, action: impl Into<String>, reaction: Reaction) -> Self {
        let action = action.into();
        if action == WILDCARD {
            self.wildcard = Some(reaction);
        } else {
            self.exact.insert(action, reaction);
        }
        self
    }

    /// Exact entry first, then the wildcard.
    pub fn lookup(&self, action: &str) -> Option<&Reaction> {
        self.exact.get(action).or(self.wildcard.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcard.is_none()
    }
}

/// Actions exempt from enforcement even when a reaction matches.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    actions: HashSet<String>,
}

impl ExclusionSet {
    pub fn contains(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().map(Into::into).collect(),
        }
    }
}
