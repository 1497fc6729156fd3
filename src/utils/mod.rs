// JSON utilities
pub mod json_converter;

pub use json_converter::{field_display, value_to_short_string};
