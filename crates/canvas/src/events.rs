//! Library-agnostic canvas events.

use uuid::Uuid;

use flow::{ConnectionRequest, NodeDataPatch, Position};

/// One discrete user gesture, already stripped of UI-library detail.
///
/// The frontend translates its own drag/connect/click callbacks into
/// these; the controller and validators never see a UI type.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A palette entry was dropped onto the canvas.
    NodeDropped { kind_id: String, position: Position },
    /// The frontend proposed connecting two handles.
    ConnectionProposed(ConnectionRequest),
    /// A node was clicked.
    NodeSelected(Uuid),
    /// The canvas background was clicked.
    PaneClicked,
    /// The settings panel's back button was used.
    Deselected,
    /// The settings panel edited a node's data.
    NodeDataEdited { node: Uuid, patch: NodeDataPatch },
    /// The save button was pressed.
    SaveRequested,
}
