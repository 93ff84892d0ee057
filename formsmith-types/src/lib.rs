//! Core type definitions for formsmith.
//!
//! This crate holds the identifiers shared by every other formsmith crate.
//! Field identifiers are UUID v7: generated once when a field is placed,
//! never reused for the lifetime of a document, even after deletion.

mod ids;

pub use ids::FieldId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid field id: {0}")]
    InvalidId(#[from] uuid::Error),
}
