//! Governance policy contract.
//!
//! When the host model reports governance mode active, the registry asks an
//! external policy whether each group may be shown. The policy is queried
//! once per candidate group per enumeration; it never sees groups the
//! capability gate already excluded.

use std::collections::HashSet;

/// External visibility policy over canonical group names.
pub trait GroupPolicy: Send + Sync {
    /// Whether the group with this canonical name may be shown.
    fn allow_group(&self, group_name: &str) -> bool;
}

/// Permissive default policy: every group is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl GroupPolicy for AllowAll {
    fn allow_group(&self, _group_name: &str) -> bool {
        true
    }
}

/// Policy hiding an explicit set of group names and allowing the rest.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    denied: HashSet<String>,
}

impl DenyList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            denied: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl GroupPolicy for DenyList {
    fn allow_group(&self, group_name: &str) -> bool {
        !self.denied.contains(group_name)
    }
}
