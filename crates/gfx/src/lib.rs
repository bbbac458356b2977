//! egui host for guarded numeric entry.
//!
//! [`input`] turns a frame's egui events into guard calls against an
//! [`input_core::InputStore`]; [`NumericInput`] wraps that in a widget that
//! also handles focus and painting.

pub mod input;
mod numeric_field;

pub use input::{RouteOutcome, blur_numeric_field, map_key, map_modifiers, route_numeric_events};
pub use numeric_field::{NumericInput, NumericInputState, input_id_for};
