//! Diagnostic error types for the group façade.
//!
//! The error surface here is deliberately tiny: logical groups are permanent,
//! synthesized nodes, so the only operation that can fail is an attempt to
//! delete one. Everything else in the crate is a total function.

use miette::Diagnostic;
use thiserror::Error;

/// Message shown to users when a delete action is blocked on a group node.
pub const CANNOT_DELETE_OBJECT: &str = "This object cannot be deleted";

/// Errors raised by [`LogicalGroup`](crate::group::LogicalGroup) operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GroupError {
    #[error("group \"{group}\" cannot be deleted")]
    #[diagnostic(
        code(tabgroups::group::delete_unsupported),
        help(
            "Logical groups are permanent, synthesized tree nodes and can never \
             be deleted. Call can_delete() first and disable the delete action \
             for group nodes instead of catching this error."
        )
    )]
    DeleteUnsupported { group: String },
}

pub type GroupResult<T> = std::result::Result<T, GroupError>;
