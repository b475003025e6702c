//! `flow` crate — core domain models, the flow store, and graph validation.

pub mod models;
pub mod error;
pub mod validate;
pub mod store;

pub use models::{ConnectionRequest, Flow, FlowEdge, FlowNode, NodeData, NodeDataPatch, Position};
pub use error::FlowError;
pub use store::FlowStore;
pub use validate::{is_connection_allowed, validate_flow, validate_for_save};
