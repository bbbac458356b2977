mod keymap;
mod route;

pub use keymap::{map_key, map_modifiers};
pub use route::{RouteOutcome, blur_numeric_field, route_numeric_events};
