//! Collaborator seams — notification and persistence stay outside the core.

use thiserror::Error;

use flow::Flow;

/// Errors returned by a sink's `persist`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The collaborator could not accept the snapshot.
    #[error("flow sink rejected the snapshot: {0}")]
    Rejected(String),
}

/// Transient user-facing notices.
///
/// The controller decides whether and what to notify; the frontend decides
/// how (toast, inline banner, status line).
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Receives the validated flow snapshot when a save is accepted.
///
/// Persistence itself is out of scope here; the save validator merely
/// gates whatever this collaborator does with the snapshot.
pub trait FlowSink {
    /// Hand over a snapshot of the flow being saved.
    ///
    /// # Errors
    /// [`SinkError::Rejected`] if the collaborator cannot accept it.
    fn persist(&mut self, flow: &Flow) -> Result<(), SinkError>;
}
