//! Error types for document commands.

use formsmith_layout::LayoutError;
use formsmith_model::FieldType;
use formsmith_types::FieldId;
use thiserror::Error;

/// Errors returned by [`crate::FormDocument`] commands and export.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No field with this id exists in the document.
    #[error("field not found: {0}")]
    NotFound(FieldId),

    /// A reorder index is outside the field sequence.
    #[error("index {index} out of bounds for {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two fields in a restored sequence share an id.
    #[error("duplicate field id: {0}")]
    DuplicateId(FieldId),

    /// Another field already uses this name.
    #[error("field name already in use: {0}")]
    DuplicateName(String),

    /// Field names must contain at least one non-whitespace character.
    #[error("field name must not be empty")]
    EmptyName,

    /// An option index is outside the field's option list.
    #[error("option index {index} out of bounds for {len} options")]
    OptionIndexOutOfBounds { index: usize, len: usize },

    /// The field type has no option list.
    #[error("field type '{0}' does not take options")]
    OptionsNotSupported(FieldType),

    /// The field type has no placeholder.
    #[error("field type '{0}' does not take a placeholder")]
    PlaceholderNotSupported(FieldType),

    /// Geometry or grid settings rejected by the layout reconciler.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Builder config could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing export files failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
