//! In-memory flow store — the single owner of nodes, edges, and selection.
//!
//! Every mutation runs synchronously inside the event handler that
//! triggered it; state lives for the session only and nothing here
//! persists or suspends.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::FlowError;
use crate::models::{
    ConnectionRequest, Flow, FlowEdge, FlowNode, NodeData, NodeDataPatch, Position,
};
use crate::validate::is_connection_allowed;

/// Owns the current flow and the at-most-one selected node.
#[derive(Debug, Default)]
pub struct FlowStore {
    flow: Flow,
    selection: Option<Uuid>,
}

impl FlowStore {
    /// Create an empty store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node of the given canvas kind at `position` and return its
    /// freshly generated id.  The node starts with empty message data.
    pub fn add_node(&mut self, kind: impl Into<String>, position: Position) -> Uuid {
        let id = Uuid::new_v4();
        let kind = kind.into();
        debug!(%id, %kind, "node added");
        self.flow.nodes.push(FlowNode {
            id,
            kind,
            position,
            data: NodeData::default(),
        });
        id
    }

    /// Add the proposed edge if both endpoints exist and its source handle
    /// is free; the flow is untouched on rejection.
    ///
    /// # Errors
    /// - [`FlowError::UnknownNodeReference`] if either endpoint is missing.
    /// - [`FlowError::SourceHandleOccupied`] if the source handle already
    ///   drives an edge.
    pub fn add_edge(&mut self, request: ConnectionRequest) -> Result<Uuid, FlowError> {
        if !self.contains_node(request.source) {
            return Err(FlowError::UnknownNodeReference {
                node_id: request.source,
                side: "source",
            });
        }
        if !self.contains_node(request.target) {
            return Err(FlowError::UnknownNodeReference {
                node_id: request.target,
                side: "target",
            });
        }
        if !is_connection_allowed(&self.flow.edges, &request) {
            return Err(FlowError::SourceHandleOccupied {
                source_node: request.source,
                source_handle: request.source_handle,
            });
        }

        let id = Uuid::new_v4();
        debug!(%id, source = %request.source, target = %request.target, "edge added");
        self.flow.edges.push(FlowEdge {
            id,
            source: request.source,
            source_handle: request.source_handle,
            target: request.target,
            target_handle: request.target_handle,
        });
        Ok(id)
    }

    /// Merge `patch` into the node's data, leaving other fields untouched.
    /// Unknown ids are a logged no-op.
    pub fn update_node_data(&mut self, id: Uuid, patch: &NodeDataPatch) {
        match self.flow.nodes.iter_mut().find(|node| node.id == id) {
            Some(node) => node.data.apply(patch),
            None => warn!(%id, "ignoring data update for unknown node"),
        }
    }

    /// Select `id` and return the node.  Unknown ids clear the selection
    /// and return `None`.
    pub fn select_node(&mut self, id: Uuid) -> Option<&FlowNode> {
        self.selection = self.contains_node(id).then_some(id);
        self.selected_node()
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// The currently selected node, if any.  Reads through to the live
    /// node, so settings-panel edits are immediately visible here.
    pub fn selected_node(&self) -> Option<&FlowNode> {
        self.selection
            .and_then(|id| self.flow.nodes.iter().find(|node| node.id == id))
    }

    pub fn node(&self, id: Uuid) -> Option<&FlowNode> {
        self.flow.nodes.iter().find(|node| node.id == id)
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.flow.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.flow.edges
    }

    /// Snapshot view of the whole flow, e.g. for handing to a save sink.
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    fn contains_node(&self, id: Uuid) -> bool {
        self.flow.nodes.iter().any(|node| node.id == id)
    }
}
