//! `canvas` crate — the thin adapter between a rendering collaborator and
//! the flow core.
//!
//! The rendering library's gesture types stay on its side of the fence;
//! it translates them into [`CanvasEvent`]s and renders whatever the
//! controller's store holds afterwards.

pub mod controller;
pub mod events;
pub mod mock;
pub mod traits;

pub use controller::{CanvasController, SavePhase};
pub use events::CanvasEvent;
pub use traits::{FlowSink, Notifier, SinkError};
