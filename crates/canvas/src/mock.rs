//! Recording test doubles for the canvas collaborator traits.
//!
//! Useful in unit tests where a real frontend or storage backend is
//! either unavailable or irrelevant.

use flow::Flow;

use crate::traits::{FlowSink, Notifier, SinkError};

/// Severity of a recorded notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notifier that records every notice it receives, in call order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// All notices seen so far.
    pub notices: Vec<(NoticeKind, String)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the error notices, in call order.
    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(kind, _)| *kind == NoticeKind::Error)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Messages of the success notices, in call order.
    pub fn successes(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(kind, _)| *kind == NoticeKind::Success)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.notices.push((NoticeKind::Success, message.to_owned()));
    }

    fn error(&mut self, message: &str) {
        self.notices.push((NoticeKind::Error, message.to_owned()));
    }
}

/// A sink that records every snapshot it is offered and can be constructed
/// failing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// All snapshots seen by `persist` (in call order), accepted or not.
    pub calls: Vec<Flow>,
    fail_with: Option<String>,
}

impl RecordingSink {
    /// A sink that accepts every snapshot.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// A sink that records each snapshot but rejects it with the given
    /// message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(message.into()),
        }
    }

    /// Number of times `persist` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl FlowSink for RecordingSink {
    fn persist(&mut self, flow: &Flow) -> Result<(), SinkError> {
        self.calls.push(flow.clone());
        match &self.fail_with {
            Some(message) => Err(SinkError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}
