//! Group registry: the ordered, filtered set of groups visible right now.
//!
//! The registry constructs one [`LogicalGroup`] per canonical kind up front
//! and never again; only *membership in the enumeration* varies afterwards,
//! through two independent gates evaluated lazily on each call:
//!
//! 1. a schema capability gate — Shared Expressions only exist at
//!    compatibility level 1400 and above, so below that the group is not
//!    merely empty but absent;
//! 2. a governance gate — when the model reports governance mode active,
//!    each remaining group's canonical name is checked against the external
//!    [`GroupPolicy`](crate::policy::GroupPolicy).
//!
//! Registries are plain values bound to a model/policy pair; tests build
//! isolated instances against fakes instead of sharing a global.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::group::{GroupKind, LogicalGroup};
use crate::model::ModelAccess;
use crate::object::Children;
use crate::policy::{AllowAll, GroupPolicy};

/// Minimum compatibility level at which shared expressions exist.
pub const EXPRESSIONS_MIN_COMPATIBILITY: u32 = 1400;

/// Owns the fixed group set and applies the two visibility gates.
pub struct GroupRegistry {
    model: Arc<dyn ModelAccess>,
    policy: Arc<dyn GroupPolicy>,
    /// One group per canonical kind, in canonical order, for the life of
    /// the registry.
    groups: Vec<LogicalGroup>,
}

impl GroupRegistry {
    /// Build a registry bound to a model and a governance policy.
    pub fn new(model: Arc<dyn ModelAccess>, policy: Arc<dyn GroupPolicy>) -> Self {
        let groups = GroupKind::CANONICAL
            .into_iter()
            .map(|kind| LogicalGroup::new(kind, Arc::clone(&model)))
            .collect();
        Self {
            model,
            policy,
            groups,
        }
    }

    /// Build a registry with the permissive default policy.
    ///
    /// Suitable when the host never activates governance mode.
    pub fn with_default_policy(model: Arc<dyn ModelAccess>) -> Self {
        Self::new(model, Arc::new(AllowAll))
    }

    /// The group for a given kind. Always present, regardless of gating.
    pub fn get(&self, kind: GroupKind) -> &LogicalGroup {
        // CANONICAL and `groups` share one ordering.
        let index = GroupKind::CANONICAL
            .iter()
            .position(|&k| k == kind)
            .unwrap_or(0);
        &self.groups[index]
    }

    /// Look up a group by canonical name.
    pub fn by_name(&self, name: &str) -> Option<&LogicalGroup> {
        GroupKind::from_name(name).map(|kind| self.get(kind))
    }

    /// Children of the named group, resolved against the live model.
    ///
    /// Unknown names yield an empty list rather than an error, so callers
    /// degrade gracefully when handed a group name this version does not
    /// know about.
    pub fn children_of(&self, name: &str) -> Children {
        match self.by_name(name) {
            Some(group) => group.children(),
            None => Children::new(),
        }
    }

    /// All groups in canonical order, after the capability gate.
    ///
    /// Lazy and restartable; the capability level is read once per call, so
    /// the result is stable for the instant of that call.
    pub fn all_groups(&self) -> impl Iterator<Item = &LogicalGroup> + '_ {
        let level = self.model.compatibility_level();
        self.groups.iter().filter(move |group| {
            if group.kind() == GroupKind::SharedExpressions
                && level < EXPRESSIONS_MIN_COMPATIBILITY
            {
                trace!(
                    level,
                    required = EXPRESSIONS_MIN_COMPATIBILITY,
                    "capability gate hides Shared Expressions"
                );
                return false;
            }
            true
        })
    }

    /// [`all_groups`](Self::all_groups) with the governance gate applied.
    ///
    /// When governance mode is inactive this is identical to `all_groups`;
    /// the policy is not consulted at all.
    pub fn visible_groups(&self) -> impl Iterator<Item = &LogicalGroup> + '_ {
        let governed = self.model.governance_active();
        self.all_groups().filter(move |group| {
            if !governed {
                return true;
            }
            let allowed = self.policy.allow_group(group.name());
            if !allowed {
                debug!(group = group.name(), "governance policy hides group");
            }
            allowed
        })
    }
}

impl std::fmt::Debug for GroupRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupRegistry")
            .field("groups", &self.groups.len())
            .field("compatibility_level", &self.model.compatibility_level())
            .field("governance_active", &self.model.governance_active())
            .finish()
    }
}
