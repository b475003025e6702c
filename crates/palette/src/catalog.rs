//! The node-kind catalog.
//!
//! Maps a stable entry identifier (the drag payload) to the canvas kind
//! stored on created nodes, plus the label, icon, and descriptions the
//! palette and settings panels render.

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Icon shown next to a palette entry.  Rendering is the frontend's job;
/// the core only names the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    MessageCircle,
    Mail,
}

/// One draggable entry in the node palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Stable identifier carried by the drag payload.
    pub id: String,
    /// Canvas kind stored on created nodes and matched by the renderer.
    pub kind: String,
    /// Short name shown in the palette and the settings-panel header.
    pub label: String,
    pub icon: Icon,
    /// One-line description under the label.
    pub description: String,
    /// Placeholder shown in the settings panel while the text is empty.
    pub placeholder: String,
}

/// Immutable table of the node kinds a canvas session may create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<PaletteEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// The stock catalog: two message kinds and one email kind.
    pub fn standard() -> Self {
        Self::new(vec![
            PaletteEntry {
                id: "message_1".into(),
                kind: "text_node_1".into(),
                label: "Message One".into(),
                icon: Icon::MessageCircle,
                description: "Send a text message".into(),
                placeholder: "Enter your message...".into(),
            },
            PaletteEntry {
                id: "message_2".into(),
                kind: "text_node_2".into(),
                label: "Message Two".into(),
                icon: Icon::MessageCircle,
                description: "Send a text message".into(),
                placeholder: "Enter your message...".into(),
            },
            PaletteEntry {
                id: "send_email".into(),
                kind: "email_node_1".into(),
                label: "Email One".into(),
                icon: Icon::Mail,
                description: "Send an email".into(),
                placeholder: "Enter your email...".into(),
            },
        ])
    }

    /// All entries, in palette display order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Resolve a drag payload identifier to its entry.
    ///
    /// # Errors
    /// [`PaletteError::UnknownKind`] if no entry carries that id.
    pub fn entry(&self, id: &str) -> Result<&PaletteEntry, PaletteError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PaletteError::UnknownKind(id.to_owned()))
    }

    /// Resolve a canvas kind back to its entry, e.g. for the settings-panel
    /// title and placeholder of an already-created node.
    ///
    /// # Errors
    /// [`PaletteError::UnknownKind`] if no entry produces that kind.
    pub fn entry_for_kind(&self, kind: &str) -> Result<&PaletteEntry, PaletteError> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .ok_or_else(|| PaletteError::UnknownKind(kind.to_owned()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
