//! Palette-level error type.

use thiserror::Error;

/// Errors returned by catalog lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The requested identifier matches no catalog entry.
    #[error("unknown node kind: '{0}'")]
    UnknownKind(String),
}
