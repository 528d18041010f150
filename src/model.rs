//! The consumed domain-model contract and its named-object value types.
//!
//! The façade never owns the model; it only reads it through [`ModelAccess`]
//! at query time, so group children always reflect the live model state.
//! The value types here are the lightweight stand-ins the host model serves
//! through that contract: tables (with their partitions), roles,
//! perspectives, cultures, relationships, data sources, and shared
//! expressions, plus the synthesized per-table [`PartitionView`] adapter.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::object::{ObjectKind, TabularObject};

// ---------------------------------------------------------------------------
// Translations
// ---------------------------------------------------------------------------

/// Per-culture translated display names for a translatable object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    entries: HashMap<String, String>,
}

impl TranslationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the translated name for a culture (e.g. `"da-DK"`).
    pub fn set(&mut self, culture: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(culture.into(), name.into());
    }

    /// Translated name for a culture, if one is defined.
    pub fn get(&self, culture: &str) -> Option<&str> {
        self.entries.get(culture).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tables and partitions
// ---------------------------------------------------------------------------

/// How a table's rows come to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Rows are sourced from a data source through partitions.
    Imported,
    /// Rows are computed from an expression; the table has no real partitions.
    Calculated,
}

/// A single partition of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    /// Source query or expression producing the partition's rows.
    pub source: String,
}

impl Partition {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

impl TabularObject for Partition {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Partition
    }
}

/// A table of the model, carrying its kind and partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub kind: TableKind,
    pub partitions: Vec<Partition>,
    translated_names: Option<TranslationSet>,
}

impl Table {
    pub fn new(name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            partitions: Vec::new(),
            translated_names: None,
        }
    }

    /// Append a partition to the table.
    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partitions.push(partition);
        self
    }

    /// Attach translated display names to the table.
    pub fn with_translated_names(mut self, translations: TranslationSet) -> Self {
        self.translated_names = Some(translations);
        self
    }
}

impl TabularObject for Table {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Table
    }
    fn translated_names(&self) -> Option<&TranslationSet> {
        self.translated_names.as_ref()
    }
}

/// Synthesized per-table partition overview node.
///
/// Tree views show one of these under the "Table Partitions" group for each
/// table that actually has sourced partitions, i.e. every non-calculated
/// table. It carries no metadata of its own; name and partitions come from
/// the table it adapts.
#[derive(Debug, Clone)]
pub struct PartitionView {
    table: Arc<Table>,
}

impl PartitionView {
    pub fn for_table(table: Arc<Table>) -> Self {
        Self { table }
    }

    /// The table this view adapts.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The adapted table's partitions.
    pub fn partitions(&self) -> &[Partition] {
        &self.table.partitions
    }
}

impl TabularObject for PartitionView {
    fn name(&self) -> &str {
        &self.table.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::PartitionView
    }
}

// ---------------------------------------------------------------------------
// Remaining named objects
// ---------------------------------------------------------------------------

/// A security role of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRole {
    pub name: String,
}

impl ModelRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TabularObject for ModelRole {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Role
    }
}

/// A perspective (named subset of the model surface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub name: String,
}

impl Perspective {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TabularObject for Perspective {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Perspective
    }
}

/// A translation culture (e.g. `"da-DK"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
}

impl Culture {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TabularObject for Culture {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Culture
    }
}

/// A relationship between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub from_table: String,
    pub to_table: String,
}

impl Relationship {
    pub fn new(
        name: impl Into<String>,
        from_table: impl Into<String>,
        to_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            from_table: from_table.into(),
            to_table: to_table.into(),
        }
    }
}

impl TabularObject for Relationship {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Relationship
    }
}

/// A data source of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub connection: String,
}

impl DataSource {
    pub fn new(name: impl Into<String>, connection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
        }
    }
}

impl TabularObject for DataSource {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::DataSource
    }
}

/// A shared (model-level) expression, available at compatibility level 1400+.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedExpression {
    pub name: String,
    pub expression: String,
}

impl NamedExpression {
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
        }
    }
}

impl TabularObject for NamedExpression {
    fn name(&self) -> &str {
        &self.name
    }
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Expression
    }
}

// ---------------------------------------------------------------------------
// Model contract
// ---------------------------------------------------------------------------

/// Read-only view of the live domain model.
///
/// The host owns the model; this crate only queries it. Collection getters
/// return snapshots in the model's own order, taken at call time.
pub trait ModelAccess: Send + Sync {
    /// Schema capability level of the model (e.g. 1200, 1400, 1500).
    fn compatibility_level(&self) -> u32;

    /// Whether the external governance policy restricts visibility.
    fn governance_active(&self) -> bool;

    fn tables(&self) -> Vec<Arc<Table>>;
    fn roles(&self) -> Vec<Arc<ModelRole>>;
    fn perspectives(&self) -> Vec<Arc<Perspective>>;
    fn cultures(&self) -> Vec<Arc<Culture>>;
    fn relationships(&self) -> Vec<Arc<Relationship>>;
    fn data_sources(&self) -> Vec<Arc<DataSource>>;
    fn expressions(&self) -> Vec<Arc<NamedExpression>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_view_adapts_table() {
        let table = Arc::new(
            Table::new("Sales", TableKind::Imported)
                .with_partition(Partition::new("Sales 2024", "SELECT * FROM sales_2024"))
                .with_partition(Partition::new("Sales 2025", "SELECT * FROM sales_2025")),
        );
        let view = PartitionView::for_table(Arc::clone(&table));

        assert_eq!(view.name(), "Sales");
        assert_eq!(view.object_kind(), ObjectKind::PartitionView);
        assert_eq!(view.partitions().len(), 2);
        assert_eq!(view.partitions()[0].name, "Sales 2024");
        // Synthesized node, no backing metadata object.
        assert_eq!(view.metadata_index(), -1);
    }

    #[test]
    fn table_translated_names() {
        let mut translations = TranslationSet::new();
        translations.set("da-DK", "Salg");
        let table =
            Table::new("Sales", TableKind::Imported).with_translated_names(translations);

        let names = table.translated_names().unwrap();
        assert_eq!(names.get("da-DK"), Some("Salg"));
        assert_eq!(names.get("de-DE"), None);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn object_kinds() {
        assert_eq!(
            ModelRole::new("Reader").object_kind(),
            ObjectKind::Role
        );
        assert_eq!(
            Culture::new("da-DK").object_kind(),
            ObjectKind::Culture
        );
        assert_eq!(
            NamedExpression::new("Budget", "let x = 1 in x").object_kind(),
            ObjectKind::Expression
        );
    }
}
