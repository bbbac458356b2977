//! # numeric_input
//!
//! A guard that keeps a text field numeric while the user types and pastes.
//!
//! The guard handles four events:
//! - **key-press**: records the current text, then blocks anything but
//!   digits, a single decimal point and editing/navigation/clipboard keys
//! - **key-release**: reverts the keystroke if the text left `[min, max]`
//! - **focus loss**: rewrites the text with exactly `scale` fraction digits
//! - **paste**: replaces the native paste with cleaned, scaled text
//!
//! [`NumericGuard`] only decides; it returns a [`Verdict`] per event.
//! [`NumericField`] applies verdicts to any [`input_core::TextField`].
//!
//! ```
//! use input_core::{FieldRef, InputId, InputValueStore, TextField};
//! use numeric_input::{Decision, KeyPress, NumericField, NumericInputConfig};
//!
//! let mut store = InputValueStore::new();
//! let id = InputId::from_raw(1);
//! store.ensure_initial(id, "10".to_string());
//!
//! let mut numeric = NumericField::new(NumericInputConfig::new().with_range(0.0, 100.0).with_scale(2));
//! let mut field = FieldRef::new(&mut store, id);
//!
//! // Typing a third digit would make 100+, so the release reverts it.
//! let press = KeyPress::from_char('5');
//! assert_eq!(numeric.on_key_press(&mut field, &press), Decision::Allow);
//! field.replace_selection("5");
//! numeric.on_key_release(&mut field);
//! assert_eq!(field.text(), "10");
//!
//! numeric.on_focus_lost(&mut field);
//! assert_eq!(field.text(), "10.00");
//! ```

mod config;
mod error;
mod field;
mod guard;
pub mod keys;
pub mod number;
pub mod paste;

pub use config::NumericInputConfig;
pub use error::ConfigError;
pub use field::NumericField;
pub use guard::{Decision, Edit, KeystrokeState, NumericGuard, Validity, Verdict};
pub use keys::{KeyClass, KeyPress, LogicalKey, Modifiers};
