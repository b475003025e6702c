//! `palette` crate — the immutable node-kind catalog.
//!
//! The catalog is the closed set of node kinds a canvas session may
//! create.  It is passed by value into the canvas layer; there is no
//! global registry.

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, Icon, PaletteEntry};
pub use error::PaletteError;
