//! Canvas controller — applies frontend events to the flow store.
//!
//! The controller is the single writer of canvas state:
//! 1. Resolves dropped palette identifiers against the catalog.
//! 2. Gates proposed connections through the connect-time validator.
//! 3. Gates saves through the pre-save validator, then hands the accepted
//!    snapshot to the flow sink.
//! 4. Routes the outcome of every gate through the `Notifier`.
//!
//! Everything runs synchronously inside the event that triggered it.

use tracing::{debug, info, warn};
use uuid::Uuid;

use flow::{
    validate_for_save, ConnectionRequest, FlowNode, FlowStore, NodeDataPatch, Position,
};
use palette::Catalog;

use crate::events::CanvasEvent;
use crate::traits::{FlowSink, Notifier};

/// Phase of the save action.
///
/// The stored phase is only ever non-`Idle` while `save_requested` is on
/// the stack; it has returned to `Idle` by the time the method returns its
/// terminal phase to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePhase {
    #[default]
    Idle,
    Validating,
    Accepted,
    Rejected,
}

/// Owns the store and the collaborator seams for one canvas session.
pub struct CanvasController<N: Notifier, S: FlowSink> {
    store: FlowStore,
    catalog: Catalog,
    notifier: N,
    sink: S,
    save_phase: SavePhase,
}

impl<N: Notifier, S: FlowSink> CanvasController<N, S> {
    /// Create a controller over an empty flow.
    pub fn new(catalog: Catalog, notifier: N, sink: S) -> Self {
        Self {
            store: FlowStore::new(),
            catalog,
            notifier,
            sink,
            save_phase: SavePhase::Idle,
        }
    }

    /// Dispatch one frontend event to its handler.
    pub fn apply(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::NodeDropped { kind_id, position } => {
                let _ = self.node_dropped(&kind_id, position);
            }
            CanvasEvent::ConnectionProposed(request) => {
                let _ = self.connection_proposed(request);
            }
            CanvasEvent::NodeSelected(id) => {
                let _ = self.node_selected(id);
            }
            CanvasEvent::PaneClicked | CanvasEvent::Deselected => self.deselected(),
            CanvasEvent::NodeDataEdited { node, patch } => self.node_data_edited(node, &patch),
            CanvasEvent::SaveRequested => {
                self.save_requested();
            }
        }
    }

    /// A palette entry was dropped: resolve its id against the catalog and
    /// create the node.  Unknown identifiers notify and create nothing.
    pub fn node_dropped(&mut self, kind_id: &str, position: Position) -> Option<Uuid> {
        match self.catalog.entry(kind_id) {
            Ok(entry) => Some(self.store.add_node(entry.kind.clone(), position)),
            Err(err) => {
                warn!(kind_id, "drop rejected: {err}");
                self.notifier.error(&err.to_string());
                None
            }
        }
    }

    /// A connect gesture was proposed: add the edge or notify why not.
    pub fn connection_proposed(&mut self, request: ConnectionRequest) -> Option<Uuid> {
        match self.store.add_edge(request) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!("connection rejected: {err}");
                self.notifier.error(&err.to_string());
                None
            }
        }
    }

    /// A node was clicked; returns it for the settings panel.
    pub fn node_selected(&mut self, id: Uuid) -> Option<&FlowNode> {
        self.store.select_node(id)
    }

    /// The background was clicked or the settings panel was dismissed.
    pub fn deselected(&mut self) {
        self.store.deselect();
    }

    /// The settings panel edited a node's data.
    pub fn node_data_edited(&mut self, node: Uuid, patch: &NodeDataPatch) {
        self.store.update_node_data(node, patch);
    }

    /// The save button was pressed: `Idle -> Validating -> {Accepted,
    /// Rejected} -> Idle`, with no retries or background work.
    ///
    /// On acceptance the sink receives one snapshot; a sink failure is
    /// surfaced as an error notice but never mutates the flow.  Returns
    /// the terminal phase.
    pub fn save_requested(&mut self) -> SavePhase {
        self.save_phase = SavePhase::Validating;

        let phase = match validate_for_save(self.store.nodes(), self.store.edges()) {
            Ok(()) => SavePhase::Accepted,
            Err(err) => {
                warn!("save validation failed: {err}");
                self.notifier.error(&err.to_string());
                SavePhase::Rejected
            }
        };

        if phase == SavePhase::Accepted {
            self.save_phase = SavePhase::Accepted;
            match self.sink.persist(self.store.flow()) {
                Ok(()) => {
                    info!(
                        nodes = self.store.nodes().len(),
                        edges = self.store.edges().len(),
                        "flow saved"
                    );
                    self.notifier.success("Flow saved successfully!");
                }
                Err(err) => {
                    warn!("flow sink failed: {err}");
                    self.notifier.error(&err.to_string());
                }
            }
        } else {
            self.save_phase = SavePhase::Rejected;
        }

        self.save_phase = SavePhase::Idle;
        phase
    }

    /// Current phase of the save action; `Idle` between events.
    pub fn save_phase(&self) -> SavePhase {
        self.save_phase
    }

    /// Read access for the rendering collaborator.
    pub fn store(&self) -> &FlowStore {
        &self.store
    }

    /// The catalog this session renders its palette from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The notifier, e.g. to drain recorded notices in tests.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The sink, e.g. to inspect recorded snapshots in tests.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
