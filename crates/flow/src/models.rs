//! Core domain models for the flow builder.
//!
//! These types are the source of truth for what a flow looks like in
//! memory.  They serialise to/from the JSON documents the canvas frontend
//! exports, so the edge fields keep that document's camelCase names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Canvas coordinates of a node, in the frontend's own pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// NodeData
// ---------------------------------------------------------------------------

/// Editable payload carried by every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Message text shown in the node body and edited in the settings panel.
    #[serde(default)]
    pub message: String,
}

/// Field-wise patch for [`NodeData`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDataPatch {
    pub message: Option<String>,
}

impl NodeData {
    /// Merge `patch` into this data, field by field.
    pub fn apply(&mut self, patch: &NodeDataPatch) {
        if let Some(message) = &patch.message {
            self.message = message.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// FlowNode
// ---------------------------------------------------------------------------

/// A single node placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique within the flow (store-generated, referenced by edges).
    pub id: Uuid,
    /// Canvas kind rendered by the frontend; resolved through the palette
    /// catalog at creation time.
    pub kind: String,
    pub position: Position,
    pub data: NodeData,
}

// ---------------------------------------------------------------------------
// FlowEdge
// ---------------------------------------------------------------------------

/// Directed edge from one node handle to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: Uuid,
    pub source: Uuid,
    pub source_handle: String,
    pub target: Uuid,
    pub target_handle: String,
}

/// A connect gesture proposed by the frontend, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub source: Uuid,
    pub source_handle: String,
    pub target: Uuid,
    pub target_handle: String,
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// A complete flow document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl Flow {
    /// Convenience constructor for testing.
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_serialises_with_camel_case_handles() {
        let edge = FlowEdge {
            id: Uuid::new_v4(),
            source: Uuid::new_v4(),
            source_handle: "source".into(),
            target: Uuid::new_v4(),
            target_handle: "target".into(),
        };

        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["sourceHandle"], "source");
        assert_eq!(json["targetHandle"], "target");
    }

    #[test]
    fn flow_round_trips_through_json() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let flow = Flow::new(
            vec![
                FlowNode {
                    id: a,
                    kind: "text_node_1".into(),
                    position: Position { x: 12.5, y: -3.0 },
                    data: NodeData { message: "hi".into() },
                },
                FlowNode {
                    id: b,
                    kind: "email_node_1".into(),
                    position: Position { x: 200.0, y: 40.0 },
                    data: NodeData::default(),
                },
            ],
            vec![FlowEdge {
                id: Uuid::new_v4(),
                source: a,
                source_handle: "source".into(),
                target: b,
                target_handle: "target".into(),
            }],
        );

        let json = serde_json::to_string(&flow).unwrap();
        let parsed: Flow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, flow);
    }

    #[test]
    fn node_data_message_defaults_to_empty_when_absent() {
        let node: FlowNode = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "kind": "text_node_2",
            "position": { "x": 1.0, "y": 2.0 },
            "data": {}
        }))
        .unwrap();
        assert_eq!(node.data.message, "");
    }

    #[test]
    fn patch_apply_overwrites_only_present_fields() {
        let mut data = NodeData { message: "old".into() };

        data.apply(&NodeDataPatch { message: None });
        assert_eq!(data.message, "old");

        data.apply(&NodeDataPatch { message: Some("new".into()) });
        assert_eq!(data.message, "new");
    }
}
