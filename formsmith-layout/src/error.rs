//! Error types for layout reconciliation.

use thiserror::Error;

/// Layout-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Width or height span is zero.
    #[error("invalid geometry: spans must be positive (w={w}, h={h})")]
    InvalidGeometry { w: u32, h: u32 },

    /// Pointer coordinate is not a finite number.
    #[error("invalid pointer position ({x_px}, {y_px})")]
    InvalidPointer { x_px: f64, y_px: f64 },

    /// Grid settings failed validation.
    #[error("invalid grid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
