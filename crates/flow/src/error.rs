//! Flow-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by flow mutations and validation.
///
/// All variants are local, recoverable, user-correctable conditions; the
/// caller surfaces them as a notice and leaves the flow unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    // ------ Connect-time errors ------

    /// The candidate edge's source handle already drives an edge.
    #[error("only one edge can originate from source handle '{source_handle}' of node '{source_node}'")]
    SourceHandleOccupied { source_node: Uuid, source_handle: String },

    /// An edge references a node id that doesn't exist in the flow.
    #[error("edge references unknown node '{node_id}' ({side} side)")]
    UnknownNodeReference { node_id: Uuid, side: &'static str },

    // ------ Save-time errors ------

    /// More than one node has no incoming edge.
    #[error("cannot save flow: {count} nodes lack an incoming edge")]
    MultipleEntryPoints { count: usize },

    // ------ Document errors ------

    /// Two or more nodes share the same id.
    #[error("duplicate node id: '{0}'")]
    DuplicateNodeId(Uuid),
}
