//! Shared capability surface of tree-displayable objects.
//!
//! Everything a generic tree view or property grid can show — real model
//! objects and the synthesized group nodes alike — implements
//! [`TabularObject`]. The [`ObjectKind`] tag lets the UI tell groups apart
//! from real domain objects in mixed listings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::TranslationSet;

/// Kind tag distinguishing object categories in mixed tree listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A synthesized logical group node.
    Group,
    Table,
    Partition,
    /// Synthesized per-table partition overview node.
    PartitionView,
    Role,
    Perspective,
    Culture,
    Relationship,
    DataSource,
    Expression,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ObjectKind::Group => "Group",
            ObjectKind::Table => "Table",
            ObjectKind::Partition => "Partition",
            ObjectKind::PartitionView => "Partition View",
            ObjectKind::Role => "Role",
            ObjectKind::Perspective => "Perspective",
            ObjectKind::Culture => "Culture",
            ObjectKind::Relationship => "Relationship",
            ObjectKind::DataSource => "Data Source",
            ObjectKind::Expression => "Expression",
        };
        write!(f, "{s}")
    }
}

/// Capability interface shared by every named object a tree view can display.
pub trait TabularObject: Send + Sync {
    /// Display name of the object.
    fn name(&self) -> &str;

    /// Kind tag for mixed listings.
    fn object_kind(&self) -> ObjectKind;

    /// Position of the backing metadata object in the host model.
    ///
    /// Synthesized objects (groups, partition views) have no backing
    /// metadata object and report `-1`.
    fn metadata_index(&self) -> i64 {
        -1
    }

    /// Translated display names, for objects that are translatable.
    fn translated_names(&self) -> Option<&TranslationSet> {
        None
    }
}

/// Children of a tree node, in the model's own order.
pub type Children = Vec<Arc<dyn TabularObject>>;

/// Erase a concrete object type into the shared [`TabularObject`] surface.
pub fn erase<T: TabularObject + 'static>(object: Arc<T>) -> Arc<dyn TabularObject> {
    object
}
