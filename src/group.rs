//! The logical group façade.
//!
//! Tree views show a fixed set of top-level folders (Tables, Roles,
//! Perspectives, …) over the model without those folders being persisted
//! model objects. [`LogicalGroup`] is that folder: a name-keyed façade whose
//! children, and whose visible property surface, are selected through a
//! per-[`GroupKind`] behavior descriptor instead of scattered conditionals.
//! The façade itself is stateless beyond its kind; children are resolved
//! against the live model on every call.

use std::sync::Arc;

use crate::error::{CANNOT_DELETE_OBJECT, GroupError, GroupResult};
use crate::model::{Culture, ModelAccess, ModelRole, PartitionView, Perspective, TableKind};
use crate::notify::{ChangeHub, PropertyChange, SubscriptionId};
use crate::object::{self, Children, ObjectKind, TabularObject};

// ---------------------------------------------------------------------------
// Group kinds
// ---------------------------------------------------------------------------

/// The closed set of logical groups, in no particular order.
///
/// Canonical enumeration order is [`GroupKind::CANONICAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    DataSources,
    Perspectives,
    Relationships,
    Roles,
    SharedExpressions,
    TablePartitions,
    Tables,
    Translations,
}

impl GroupKind {
    /// All groups in canonical enumeration order.
    pub const CANONICAL: [GroupKind; 8] = [
        GroupKind::DataSources,
        GroupKind::Perspectives,
        GroupKind::Relationships,
        GroupKind::Roles,
        GroupKind::SharedExpressions,
        GroupKind::TablePartitions,
        GroupKind::Tables,
        GroupKind::Translations,
    ];

    /// Canonical display name of the group.
    pub fn name(self) -> &'static str {
        match self {
            GroupKind::DataSources => "Data Sources",
            GroupKind::Perspectives => "Perspectives",
            GroupKind::Relationships => "Relationships",
            GroupKind::Roles => "Roles",
            GroupKind::SharedExpressions => "Shared Expressions",
            GroupKind::TablePartitions => "Table Partitions",
            GroupKind::Tables => "Tables",
            GroupKind::Translations => "Translations",
        }
    }

    /// Resolve a canonical name back to its kind.
    ///
    /// Unknown names resolve to `None`; callers degrade to an empty child
    /// list rather than erroring, so future group names stay harmless.
    pub fn from_name(name: &str) -> Option<GroupKind> {
        GroupKind::CANONICAL.into_iter().find(|k| k.name() == name)
    }

    fn behavior(self) -> GroupBehavior {
        match self {
            GroupKind::DataSources => GroupBehavior {
                browsable: "name",
                resolve: resolve_data_sources,
            },
            GroupKind::Perspectives => GroupBehavior {
                browsable: "perspectives",
                resolve: resolve_perspectives,
            },
            GroupKind::Relationships => GroupBehavior {
                browsable: "name",
                resolve: resolve_relationships,
            },
            GroupKind::Roles => GroupBehavior {
                browsable: "roles",
                resolve: resolve_roles,
            },
            GroupKind::SharedExpressions => GroupBehavior {
                browsable: "name",
                resolve: resolve_expressions,
            },
            GroupKind::TablePartitions => GroupBehavior {
                browsable: "name",
                resolve: resolve_partition_views,
            },
            GroupKind::Tables => GroupBehavior {
                browsable: "name",
                resolve: resolve_tables,
            },
            GroupKind::Translations => GroupBehavior {
                browsable: "cultures",
                resolve: resolve_cultures,
            },
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Behavior dispatch
// ---------------------------------------------------------------------------

/// Per-kind behavior descriptor: which single property the grid shows, and
/// how children are resolved against the live model.
#[derive(Clone, Copy)]
struct GroupBehavior {
    browsable: &'static str,
    resolve: fn(&dyn ModelAccess) -> Children,
}

fn resolve_tables(model: &dyn ModelAccess) -> Children {
    model.tables().into_iter().map(object::erase).collect()
}

fn resolve_roles(model: &dyn ModelAccess) -> Children {
    model.roles().into_iter().map(object::erase).collect()
}

fn resolve_perspectives(model: &dyn ModelAccess) -> Children {
    model.perspectives().into_iter().map(object::erase).collect()
}

fn resolve_cultures(model: &dyn ModelAccess) -> Children {
    model.cultures().into_iter().map(object::erase).collect()
}

fn resolve_relationships(model: &dyn ModelAccess) -> Children {
    model.relationships().into_iter().map(object::erase).collect()
}

fn resolve_data_sources(model: &dyn ModelAccess) -> Children {
    model.data_sources().into_iter().map(object::erase).collect()
}

fn resolve_expressions(model: &dyn ModelAccess) -> Children {
    model.expressions().into_iter().map(object::erase).collect()
}

/// One partition view per table, skipping calculated tables: their rows come
/// from an expression, not from sourced partitions.
fn resolve_partition_views(model: &dyn ModelAccess) -> Children {
    model
        .tables()
        .into_iter()
        .filter(|t| t.kind != TableKind::Calculated)
        .map(|t| object::erase(Arc::new(PartitionView::for_table(t))))
        .collect()
}

// ---------------------------------------------------------------------------
// The façade
// ---------------------------------------------------------------------------

/// A synthesized, permanent tree node grouping one category of model objects.
pub struct LogicalGroup {
    kind: GroupKind,
    /// Handle to the live model; read-only, never owned by the group.
    model: Arc<dyn ModelAccess>,
    hub: ChangeHub,
}

impl LogicalGroup {
    pub fn new(kind: GroupKind, model: Arc<dyn ModelAccess>) -> Self {
        Self {
            kind,
            model,
            hub: ChangeHub::new(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Canonical display name of the group.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The live model the group reads through.
    pub fn model(&self) -> &dyn ModelAccess {
        self.model.as_ref()
    }

    /// Children of the group, resolved against the live model right now.
    pub fn children(&self) -> Children {
        (self.kind.behavior().resolve)(self.model.as_ref())
    }

    /// Groups can never be deleted.
    pub fn can_delete(&self) -> bool {
        false
    }

    /// Human-readable reason shown next to a disabled delete action.
    pub fn delete_blocked_reason(&self) -> &'static str {
        CANNOT_DELETE_OBJECT
    }

    /// Always fails: deletion is structurally disallowed for every group.
    pub fn delete(&self) -> GroupResult<()> {
        Err(GroupError::DeleteUnsupported {
            group: self.name().to_string(),
        })
    }

    /// Whether the property grid should show this property for this group.
    ///
    /// Each group exposes exactly one property: the Perspectives,
    /// Translations and Roles groups show their collection property, every
    /// other group only its name.
    pub fn is_browsable(&self, property: &str) -> bool {
        property == self.kind.behavior().browsable
    }

    /// Every property of every group is read-only, including `"name"`.
    pub fn is_editable(&self, _property: &str) -> bool {
        false
    }

    // -- collection properties backing the grid --------------------------------

    /// Live perspectives collection (shown for the Perspectives group).
    pub fn perspectives(&self) -> Vec<Arc<Perspective>> {
        self.model.perspectives()
    }

    /// Live translation cultures (shown for the Translations group).
    pub fn cultures(&self) -> Vec<Arc<Culture>> {
        self.model.cultures()
    }

    /// Live roles collection (shown for the Roles group).
    pub fn roles(&self) -> Vec<Arc<ModelRole>> {
        self.model.roles()
    }

    // -- property-change contract ----------------------------------------------

    /// Register a property-change listener.
    ///
    /// Required by the shared property-host contract; since no group
    /// property is editable, the UI never actually originates a change.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PropertyChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.hub.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }
}

impl TabularObject for LogicalGroup {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Group
    }

    fn metadata_index(&self) -> i64 {
        -1
    }

    /// Groups are not translatable entities.
    fn translated_names(&self) -> Option<&crate::model::TranslationSet> {
        None
    }
}

impl std::fmt::Debug for LogicalGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicalGroup")
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Culture, DataSource, ModelRole, NamedExpression, Partition, Perspective, Relationship,
        Table, TableKind,
    };

    #[derive(Default)]
    struct FakeModel {
        compatibility_level: u32,
        governance_active: bool,
        tables: Vec<Arc<Table>>,
        roles: Vec<Arc<ModelRole>>,
        perspectives: Vec<Arc<Perspective>>,
        cultures: Vec<Arc<Culture>>,
        relationships: Vec<Arc<Relationship>>,
        data_sources: Vec<Arc<DataSource>>,
        expressions: Vec<Arc<NamedExpression>>,
    }

    impl ModelAccess for FakeModel {
        fn compatibility_level(&self) -> u32 {
            self.compatibility_level
        }
        fn governance_active(&self) -> bool {
            self.governance_active
        }
        fn tables(&self) -> Vec<Arc<Table>> {
            self.tables.clone()
        }
        fn roles(&self) -> Vec<Arc<ModelRole>> {
            self.roles.clone()
        }
        fn perspectives(&self) -> Vec<Arc<Perspective>> {
            self.perspectives.clone()
        }
        fn cultures(&self) -> Vec<Arc<Culture>> {
            self.cultures.clone()
        }
        fn relationships(&self) -> Vec<Arc<Relationship>> {
            self.relationships.clone()
        }
        fn data_sources(&self) -> Vec<Arc<DataSource>> {
            self.data_sources.clone()
        }
        fn expressions(&self) -> Vec<Arc<NamedExpression>> {
            self.expressions.clone()
        }
    }

    fn populated_model() -> Arc<FakeModel> {
        Arc::new(FakeModel {
            compatibility_level: 1500,
            governance_active: false,
            tables: vec![
                Arc::new(
                    Table::new("Sales", TableKind::Imported)
                        .with_partition(Partition::new("Sales", "SELECT * FROM sales")),
                ),
                Arc::new(Table::new("Budget", TableKind::Calculated)),
                Arc::new(
                    Table::new("Customers", TableKind::Imported)
                        .with_partition(Partition::new("Customers", "SELECT * FROM customers")),
                ),
            ],
            roles: vec![
                Arc::new(ModelRole::new("Reader")),
                Arc::new(ModelRole::new("Admin")),
            ],
            perspectives: vec![Arc::new(Perspective::new("Finance"))],
            cultures: vec![
                Arc::new(Culture::new("da-DK")),
                Arc::new(Culture::new("de-DE")),
            ],
            relationships: vec![Arc::new(Relationship::new(
                "rel-1",
                "Sales",
                "Customers",
            ))],
            data_sources: vec![Arc::new(DataSource::new("DW", "Data Source=dw;"))],
            expressions: vec![Arc::new(NamedExpression::new("Base", "let x = 1 in x"))],
        })
    }

    fn group(kind: GroupKind) -> LogicalGroup {
        LogicalGroup::new(kind, populated_model())
    }

    fn child_names(group: &LogicalGroup) -> Vec<String> {
        group.children().iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn children_reflect_model_collections_in_order() {
        assert_eq!(
            child_names(&group(GroupKind::Tables)),
            ["Sales", "Budget", "Customers"]
        );
        assert_eq!(child_names(&group(GroupKind::Roles)), ["Reader", "Admin"]);
        assert_eq!(child_names(&group(GroupKind::Perspectives)), ["Finance"]);
        assert_eq!(
            child_names(&group(GroupKind::Translations)),
            ["da-DK", "de-DE"]
        );
        assert_eq!(child_names(&group(GroupKind::Relationships)), ["rel-1"]);
        assert_eq!(child_names(&group(GroupKind::DataSources)), ["DW"]);
        assert_eq!(child_names(&group(GroupKind::SharedExpressions)), ["Base"]);
    }

    #[test]
    fn partition_views_skip_calculated_tables() {
        let g = group(GroupKind::TablePartitions);
        let children = g.children();
        // "Budget" is calculated and must not get a partition view.
        assert_eq!(child_names(&g), ["Sales", "Customers"]);
        for child in &children {
            assert_eq!(child.object_kind(), ObjectKind::PartitionView);
        }
    }

    #[test]
    fn children_track_live_model_state() {
        let model = Arc::new(FakeModel {
            compatibility_level: 1500,
            ..Default::default()
        });
        let g = LogicalGroup::new(GroupKind::Tables, model);
        assert!(g.children().is_empty());
    }

    #[test]
    fn browsable_matrix() {
        // Only the Perspectives group shows "perspectives".
        for kind in GroupKind::CANONICAL {
            let g = group(kind);
            assert_eq!(
                g.is_browsable("perspectives"),
                kind == GroupKind::Perspectives,
                "perspectives visibility wrong for {kind:?}"
            );
            assert_eq!(
                g.is_browsable("cultures"),
                kind == GroupKind::Translations,
                "cultures visibility wrong for {kind:?}"
            );
            assert_eq!(
                g.is_browsable("roles"),
                kind == GroupKind::Roles,
                "roles visibility wrong for {kind:?}"
            );
            // "name" is shown exactly when the group has no collection property.
            let narrowed = matches!(
                kind,
                GroupKind::Perspectives | GroupKind::Translations | GroupKind::Roles
            );
            assert_eq!(
                g.is_browsable("name"),
                !narrowed,
                "name visibility wrong for {kind:?}"
            );
        }
    }

    #[test]
    fn nothing_is_editable() {
        for kind in GroupKind::CANONICAL {
            let g = group(kind);
            for property in ["name", "perspectives", "cultures", "roles", "whatever"] {
                assert!(!g.is_editable(property));
            }
        }
    }

    #[test]
    fn delete_is_structurally_disallowed() {
        for kind in GroupKind::CANONICAL {
            let g = group(kind);
            assert!(!g.can_delete());
            assert_eq!(g.delete_blocked_reason(), "This object cannot be deleted");
            let err = g.delete().unwrap_err();
            assert!(matches!(err, GroupError::DeleteUnsupported { .. }));
        }
    }

    #[test]
    fn facade_object_surface() {
        let g = group(GroupKind::Tables);
        assert_eq!(TabularObject::name(&g), "Tables");
        assert_eq!(g.object_kind(), ObjectKind::Group);
        assert_eq!(g.metadata_index(), -1);
        assert!(g.translated_names().is_none());
    }

    #[test]
    fn collection_property_accessors() {
        let g = group(GroupKind::Perspectives);
        assert_eq!(g.perspectives().len(), 1);
        assert_eq!(g.cultures().len(), 2);
        assert_eq!(g.roles().len(), 2);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in GroupKind::CANONICAL {
            assert_eq!(GroupKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GroupKind::from_name("Measures"), None);
        assert_eq!(GroupKind::from_name(""), None);
    }

    #[test]
    fn change_listener_contract() {
        let g = group(GroupKind::Tables);
        let id = g.subscribe(|_| {});
        assert!(g.unsubscribe(id));
        assert!(!g.unsubscribe(id));
    }
}
