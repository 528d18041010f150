//! # tabular-groups
//!
//! Logical group façade for tabular-model tree views and property grids.
//!
//! A generic, reflection-driven editor UI wants a fixed set of top-level
//! folders — Tables, Roles, Perspectives, Translations, Relationships,
//! Data Sources, Table Partitions, Shared Expressions — over a larger
//! hierarchical model, without those folders being persisted model objects.
//! This crate provides that façade layer:
//!
//! - **Groups** (`group`): [`LogicalGroup`](group::LogicalGroup), a
//!   permanent synthesized tree node whose children and visible property
//!   surface are dispatched per [`GroupKind`](group::GroupKind)
//! - **Registry** (`registry`): the canonical ordered group set behind a
//!   schema capability gate and an external governance gate
//! - **Model contract** (`model`): the read-only
//!   [`ModelAccess`](model::ModelAccess) view of the host's live model
//! - **Policy contract** (`policy`): per-group-name visibility predicate
//! - **Notification** (`notify`): the property-change listener contract
//!   every property-hosting object implements
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use tabular_groups::model::{ModelAccess, Table, TableKind};
//! use tabular_groups::registry::GroupRegistry;
//!
//! struct Host;
//!
//! impl ModelAccess for Host {
//!     fn compatibility_level(&self) -> u32 { 1500 }
//!     fn governance_active(&self) -> bool { false }
//!     fn tables(&self) -> Vec<Arc<Table>> {
//!         vec![Arc::new(Table::new("Sales", TableKind::Imported))]
//!     }
//!     fn roles(&self) -> Vec<Arc<tabular_groups::model::ModelRole>> { Vec::new() }
//!     fn perspectives(&self) -> Vec<Arc<tabular_groups::model::Perspective>> { Vec::new() }
//!     fn cultures(&self) -> Vec<Arc<tabular_groups::model::Culture>> { Vec::new() }
//!     fn relationships(&self) -> Vec<Arc<tabular_groups::model::Relationship>> { Vec::new() }
//!     fn data_sources(&self) -> Vec<Arc<tabular_groups::model::DataSource>> { Vec::new() }
//!     fn expressions(&self) -> Vec<Arc<tabular_groups::model::NamedExpression>> { Vec::new() }
//! }
//!
//! let registry = GroupRegistry::with_default_policy(Arc::new(Host));
//! for group in registry.visible_groups() {
//!     let _children = group.children();
//! }
//! ```

pub mod error;
pub mod group;
pub mod model;
pub mod notify;
pub mod object;
pub mod policy;
pub mod registry;
