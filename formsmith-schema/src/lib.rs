//! Schema derivation for formsmith.
//!
//! Two pure functions over an ordered field sequence:
//! - [`generate_data_schema`] — the JSON Schema describing submitted data
//! - [`generate_ui_schema`] — a vertical layout with one control per field
//!
//! Both preserve field order and recompute from scratch on every call.
//! Grid geometry is deliberately ignored; it only matters to the editor.

mod data;
mod preview;
mod ui;

pub use data::{DataSchema, PropertySchema, RootType, generate_data_schema, property_for};
pub use preview::{FormData, initial_form_data};
pub use ui::{ControlType, LayoutType, UiElement, UiSchema, generate_ui_schema, scope_for};
