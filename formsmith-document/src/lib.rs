//! Editable form document for formsmith.
//!
//! [`FormDocument`] owns the ordered field sequence and the selection, and is
//! the only place fields are mutated. The editor surface drives it through
//! commands (add, update, remove, move, reposition, select) and reads the
//! derived data and UI schemas back out. Every command either applies fully
//! or returns a [`DocumentError`] and leaves the document untouched.
//!
//! [`BuilderConfig`] carries the grid settings, loadable from TOML, and
//! [`ExportBundle`] renders `schema.json` / `uischema.json`.

mod config;
mod document;
mod error;
mod export;

pub use config::BuilderConfig;
pub use document::FormDocument;
pub use error::{DocumentError, DocumentResult};
pub use export::{ExportBundle, SCHEMA_FILE, UI_SCHEMA_FILE};

pub use formsmith_layout::{GridSettings, LayoutError, LayoutHint};
pub use formsmith_model::{FieldConfig, FieldConfigPatch, FieldInstance, FieldType, Layout};
pub use formsmith_schema::{DataSchema, UiSchema};
pub use formsmith_types::FieldId;
