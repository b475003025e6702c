//! Flow validation — the connect-time gate and the pre-save gate.
//!
//! Rules enforced:
//! 1. Each `(source node, source handle)` pair drives at most one edge.
//! 2. A flow with more than one node has at most one entry point (node
//!    without incoming edges) by the time it is saved.
//! 3. Whole documents additionally need unique node ids and edges whose
//!    endpoints exist.
//!
//! All functions here are pure computations over the caller's snapshot of
//! nodes and edges; nothing is mutated.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::FlowError;
use crate::models::{ConnectionRequest, Flow, FlowEdge, FlowNode};

/// Connect-time predicate: may `candidate` be added next to `edges`?
///
/// False iff an existing edge already originates from the candidate's
/// `(source, source_handle)` pair.  Target handles are unrestricted — any
/// number of edges may terminate at the same input.
pub fn is_connection_allowed(edges: &[FlowEdge], candidate: &ConnectionRequest) -> bool {
    !edges.iter().any(|edge| {
        edge.source == candidate.source && edge.source_handle == candidate.source_handle
    })
}

/// Pre-save gate: once a flow has more than one node, at most one of them
/// may lack an incoming edge.
///
/// Flows with 0 or 1 node always pass.
///
/// # Errors
/// [`FlowError::MultipleEntryPoints`] when two or more nodes lack an
/// incoming edge.
pub fn validate_for_save(nodes: &[FlowNode], edges: &[FlowEdge]) -> Result<(), FlowError> {
    if nodes.len() <= 1 {
        return Ok(());
    }

    let rootless = rootless_nodes(nodes, edges);
    if rootless.len() > 1 {
        return Err(FlowError::MultipleEntryPoints { count: rootless.len() });
    }

    Ok(())
}

/// Nodes that never appear as an edge target, in insertion order.
pub fn rootless_nodes<'a>(nodes: &'a [FlowNode], edges: &[FlowEdge]) -> Vec<&'a FlowNode> {
    nodes
        .iter()
        .filter(|node| !edges.iter().any(|edge| edge.target == node.id))
        .collect()
}

/// Validate a whole flow document, e.g. one deserialized from JSON.
///
/// The store guarantees most of this by construction; documents from
/// outside do not, so everything is re-checked here.  The first failing
/// rule wins, in this order:
/// 1. Node ids must be unique.
/// 2. Every edge must reference existing nodes on both sides.
/// 3. Each `(source, source handle)` pair drives at most one edge.
/// 4. The pre-save entry-point rule must hold.
///
/// # Errors
/// - [`FlowError::DuplicateNodeId`] if two nodes share an id.
/// - [`FlowError::UnknownNodeReference`] if an edge references a missing node.
/// - [`FlowError::SourceHandleOccupied`] if a source handle drives two edges.
/// - [`FlowError::MultipleEntryPoints`] if more than one node is rootless.
pub fn validate_flow(flow: &Flow) -> Result<(), FlowError> {
    let mut seen_ids: HashSet<Uuid> = HashSet::new();
    for node in &flow.nodes {
        if !seen_ids.insert(node.id) {
            return Err(FlowError::DuplicateNodeId(node.id));
        }
    }

    for edge in &flow.edges {
        if !seen_ids.contains(&edge.source) {
            return Err(FlowError::UnknownNodeReference {
                node_id: edge.source,
                side: "source",
            });
        }
        if !seen_ids.contains(&edge.target) {
            return Err(FlowError::UnknownNodeReference {
                node_id: edge.target,
                side: "target",
            });
        }
    }

    let mut occupied: HashSet<(Uuid, &str)> = HashSet::new();
    for edge in &flow.edges {
        if !occupied.insert((edge.source, edge.source_handle.as_str())) {
            return Err(FlowError::SourceHandleOccupied {
                source_node: edge.source,
                source_handle: edge.source_handle.clone(),
            });
        }
    }

    validate_for_save(&flow.nodes, &flow.edges)
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeData, Position};

    fn make_node(id: Uuid) -> FlowNode {
        FlowNode {
            id,
            kind: "text_node_1".into(),
            position: Position { x: 0.0, y: 0.0 },
            data: NodeData::default(),
        }
    }

    fn make_edge(source: Uuid, target: Uuid) -> FlowEdge {
        FlowEdge {
            id: Uuid::new_v4(),
            source,
            source_handle: "source".into(),
            target,
            target_handle: "target".into(),
        }
    }

    fn make_request(source: Uuid, target: Uuid) -> ConnectionRequest {
        ConnectionRequest {
            source,
            source_handle: "source".into(),
            target,
            target_handle: "target".into(),
        }
    }

    #[test]
    fn connection_to_free_source_handle_is_allowed() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let edges = vec![make_edge(a, b)];
        assert!(is_connection_allowed(&edges, &make_request(b, c)));
    }

    #[test]
    fn connection_from_occupied_source_handle_is_rejected() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let edges = vec![make_edge(a, b)];
        assert!(!is_connection_allowed(&edges, &make_request(a, c)));
    }

    #[test]
    fn same_source_node_different_handle_is_allowed() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let edges = vec![make_edge(a, b)];
        let mut request = make_request(a, c);
        request.source_handle = "source_alt".into();
        assert!(is_connection_allowed(&edges, &request));
    }

    #[test]
    fn many_edges_may_share_a_target_handle() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        // A → C already exists; B → C lands on the same target handle.
        let edges = vec![make_edge(a, c)];
        assert!(is_connection_allowed(&edges, &make_request(b, c)));
    }

    #[test]
    fn empty_flow_passes_save_validation() {
        assert!(validate_for_save(&[], &[]).is_ok());
    }

    #[test]
    fn single_node_passes_save_validation() {
        let nodes = vec![make_node(Uuid::new_v4())];
        assert!(validate_for_save(&nodes, &[]).is_ok());
    }

    #[test]
    fn two_disconnected_nodes_fail_save_validation() {
        let nodes = vec![make_node(Uuid::new_v4()), make_node(Uuid::new_v4())];
        assert_eq!(
            validate_for_save(&nodes, &[]),
            Err(FlowError::MultipleEntryPoints { count: 2 })
        );
    }

    #[test]
    fn two_connected_nodes_pass_save_validation() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let nodes = vec![make_node(a), make_node(b)];
        let edges = vec![make_edge(a, b)];
        assert!(validate_for_save(&nodes, &edges).is_ok());
    }

    #[test]
    fn fan_out_with_single_root_passes_until_a_stray_node_appears() {
        //   A
        //  / \
        // B   C
        let (a, b, c, d) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut nodes = vec![make_node(a), make_node(b), make_node(c)];
        let mut edges = vec![make_edge(a, b)];
        let mut second = make_edge(a, c);
        second.source_handle = "source_alt".into();
        edges.push(second);

        assert!(validate_for_save(&nodes, &edges).is_ok());

        // An unconnected D gives the flow a second entry point.
        nodes.push(make_node(d));
        assert_eq!(
            validate_for_save(&nodes, &edges),
            Err(FlowError::MultipleEntryPoints { count: 2 })
        );
    }

    #[test]
    fn rootless_nodes_preserve_insertion_order() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let nodes = vec![make_node(a), make_node(b), make_node(c)];
        let edges = vec![make_edge(a, c)];

        let rootless: Vec<Uuid> = rootless_nodes(&nodes, &edges).iter().map(|n| n.id).collect();
        assert_eq!(rootless, vec![a, b]);
    }

    #[test]
    fn document_with_duplicate_node_id_is_rejected() {
        let a = Uuid::new_v4();
        let flow = Flow::new(vec![make_node(a), make_node(a)], vec![]);
        assert_eq!(validate_flow(&flow), Err(FlowError::DuplicateNodeId(a)));
    }

    #[test]
    fn document_edge_referencing_missing_node_is_rejected() {
        let (a, ghost) = (Uuid::new_v4(), Uuid::new_v4());
        let flow = Flow::new(vec![make_node(a)], vec![make_edge(a, ghost)]);
        assert_eq!(
            validate_flow(&flow),
            Err(FlowError::UnknownNodeReference { node_id: ghost, side: "target" })
        );
    }

    #[test]
    fn document_with_doubled_source_handle_is_rejected() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let flow = Flow::new(
            vec![make_node(a), make_node(b), make_node(c)],
            vec![make_edge(a, b), make_edge(a, c)],
        );
        assert!(matches!(
            validate_flow(&flow),
            Err(FlowError::SourceHandleOccupied { source_node, .. }) if source_node == a
        ));
    }

    #[test]
    fn valid_linear_document_passes() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let flow = Flow::new(
            vec![make_node(a), make_node(b), make_node(c)],
            vec![make_edge(a, b), make_edge(b, c)],
        );
        assert!(validate_flow(&flow).is_ok());
    }
}
