//! Core types and state for the webforge page builder.
//!
//! This crate provides the foundation used by the code generator and packager:
//! - The component tree model (`ComponentNode`, `NodeKind`) and its JSON wire form
//! - Node type tags, the palette, and output framework tags
//! - The `Store` that owns builder state behind an injected `Storage` adapter
//! - Error types

pub mod errors;
pub mod node;
pub mod palette;
pub mod storage;
pub mod store;
pub mod types;

pub use errors::*;
pub use node::{CommonProps, ComponentNode, NodeKind, NodeUpdate, RawNode};
pub use palette::{palette, PaletteEntry};
pub use storage::{FileStorage, MemoryStorage, Storage, DEFAULT_STORAGE_FILE, STORAGE_KEY};
pub use store::{BuilderState, Store};
pub use types::*;
