//! Form field model for formsmith.
//!
//! Defines the types every other formsmith crate works with:
//! - [`FieldType`] — the kind of a form field, with a per-type [`FieldDescriptor`]
//! - [`FieldConfig`] — the named attributes of one field (name, label, options, …)
//! - [`FieldConfigPatch`] — a shallow partial update for a [`FieldConfig`]
//! - [`Layout`] — grid cell geometry of a placed field
//! - [`FieldInstance`] — one field placed in a form document
//!
//! The [`registry`] module builds default configurations for new fields.
//! Adding a field type means adding a variant and a descriptor entry in
//! `field_type.rs`; schema mapping, defaults, and layout policy all read
//! from the descriptor.

mod config;
mod field_type;
mod instance;
mod layout;
pub mod registry;

pub use config::{DefaultValue, FieldConfig, FieldConfigPatch};
pub use field_type::{DefaultKind, FieldDescriptor, FieldType, HeightPolicy, JsonType, SchemaRule};
pub use instance::FieldInstance;
pub use layout::Layout;
