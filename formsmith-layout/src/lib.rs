//! Grid layout reconciliation for formsmith.
//!
//! Keeps every placed field on a valid grid position without the editor
//! having to compute one:
//! - [`GridSettings`] — column count, default span, canvas pixel metrics
//! - [`LayoutReconciler`] — default placement, pointer-to-cell conversion,
//!   and per-type height constraints
//! - [`LayoutHint`] — how the editor asks for a specific position
//!
//! Overlapping fields are never rearranged here.

mod error;
mod grid;
mod reconciler;

pub use error::{LayoutError, LayoutResult};
pub use grid::GridSettings;
pub use reconciler::{LayoutHint, LayoutReconciler};
