//! # input_core
//!
//! UI-agnostic text field state for guarded numeric entry.
//!
//! This crate provides the pieces a host needs to expose a text field to an
//! input guard:
//! - [`InputId`]: an opaque identifier for a text field
//! - [`InputValueStore`]: central store for field text, caret and selection
//! - [`SelectionRange`]: a normalized byte range inside a field's text
//! - [`TextField`]: the capability a guard uses to read and rewrite a field
//!
//! ## Design Principles
//!
//! Nothing here knows about key codes, numbers or rendering. The store only
//! edits UTF-8 text and keeps the caret on character boundaries, so it can be
//! driven by any toolkit and tested without one.
//!
//! ## Integration
//!
//! Guards talk to fields through [`TextField`]. For store-backed fields, bind
//! a store and an id with [`FieldRef`]:
//! ```
//! use input_core::{FieldRef, InputId, InputValueStore, TextField};
//!
//! let mut store = InputValueStore::new();
//! let id = InputId::from_raw(7);
//! store.ensure_initial(id, "12".to_string());
//!
//! let mut field = FieldRef::new(&mut store, id);
//! field.replace_selection("3");
//! assert_eq!(field.text(), "123");
//! ```

mod id;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use selection::SelectionRange;
pub use store::InputValueStore;
pub use traits::{FieldRef, InputStore, TextField};

// Re-export text utilities for integration layers that edit text themselves.
pub use text::{clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary};
