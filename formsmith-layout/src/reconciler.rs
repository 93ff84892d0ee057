use crate::{GridSettings, LayoutError, LayoutResult};
use formsmith_model::{FieldInstance, FieldType, Layout};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A placement request from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LayoutHint {
    /// Top-left cell; spans come from the field type.
    Cell { x: u32, y: u32 },
    /// Drop point in canvas pixels.
    Pointer { x_px: f64, y_px: f64 },
    /// Full geometry, e.g. restored from a saved layout.
    Geometry(Layout),
}

/// Assigns and constrains grid geometry for fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutReconciler {
    settings: GridSettings,
}

impl LayoutReconciler {
    /// Creates a reconciler after validating `settings`.
    pub fn new(settings: GridSettings) -> LayoutResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Default spans for a new field of `field_type`.
    #[must_use]
    pub fn default_span(&self, field_type: &FieldType) -> (u32, u32) {
        let descriptor = field_type.descriptor();
        let h = descriptor.height.clamp(descriptor.default_height);
        (self.settings.default_width, h)
    }

    /// Position for a new field appended after `existing`, in reading order.
    ///
    /// Goes to the right of the last laid-out field when it fits in the row,
    /// otherwise wraps to column 0 below everything placed so far.
    #[must_use]
    pub fn default_layout(&self, field_type: &FieldType, existing: &[FieldInstance]) -> Layout {
        let (w, h) = self.default_span(field_type);
        let Some(last) = existing.iter().rev().find_map(|f| f.layout) else {
            return Layout::new(0, 0, w, h);
        };

        if last.right().saturating_add(w) <= self.settings.columns {
            return Layout::new(last.right(), last.y, w, h);
        }

        let next_row = existing
            .iter()
            .filter_map(|f| f.layout)
            .map(|l| l.bottom())
            .max()
            .unwrap_or(0);
        Layout::new(0, next_row, w, h)
    }

    /// Converts a pointer position in canvas pixels to a grid cell.
    ///
    /// Negative coordinates clamp to 0; `x` clamps to the last column.
    pub fn cell_at(&self, x_px: f64, y_px: f64) -> LayoutResult<(u32, u32)> {
        if !(x_px.is_finite() && y_px.is_finite()) {
            return Err(LayoutError::InvalidPointer { x_px, y_px });
        }
        let columns = f64::from(self.settings.columns);
        let col = (x_px / self.settings.canvas_width_px * columns).floor();
        let row = (y_px / self.settings.row_height_px).floor();

        let x = col.clamp(0.0, columns - 1.0) as u32;
        let y = row.max(0.0).min(f64::from(u32::MAX)) as u32;
        Ok((x, y))
    }

    /// Geometry for a field of `field_type` dropped at a pointer position.
    ///
    /// The column is pulled left if needed so the default span stays inside
    /// the grid.
    pub fn place_at_pointer(
        &self,
        field_type: &FieldType,
        x_px: f64,
        y_px: f64,
    ) -> LayoutResult<Layout> {
        let (x, y) = self.cell_at(x_px, y_px)?;
        let (w, h) = self.default_span(field_type);
        let x = x.min(self.settings.columns.saturating_sub(w));
        debug!(x_px, y_px, x, y, "Pointer drop mapped to grid cell");
        Ok(Layout::new(x, y, w, h))
    }

    /// Applies the type's height policy to caller-supplied geometry.
    ///
    /// Position and width are kept verbatim; overlaps are left alone.
    pub fn constrain(&self, field_type: &FieldType, layout: Layout) -> LayoutResult<Layout> {
        if !layout.is_valid() {
            return Err(LayoutError::InvalidGeometry {
                w: layout.w,
                h: layout.h,
            });
        }
        let h = field_type.descriptor().height.clamp(layout.h);
        if h != layout.h {
            debug!(
                field_type = %field_type,
                requested = layout.h,
                applied = h,
                "Height clamped by type policy"
            );
        }
        Ok(Layout { h, ..layout })
    }

    /// Resolves the geometry for a new field.
    pub fn resolve(
        &self,
        field_type: &FieldType,
        hint: Option<LayoutHint>,
        existing: &[FieldInstance],
    ) -> LayoutResult<Layout> {
        match hint {
            None => Ok(self.default_layout(field_type, existing)),
            Some(LayoutHint::Cell { x, y }) => {
                let (w, h) = self.default_span(field_type);
                Ok(Layout::new(x, y, w, h))
            }
            Some(LayoutHint::Pointer { x_px, y_px }) => {
                self.place_at_pointer(field_type, x_px, y_px)
            }
            Some(LayoutHint::Geometry(layout)) => self.constrain(field_type, layout),
        }
    }
}

impl Default for LayoutReconciler {
    fn default() -> Self {
        Self {
            settings: GridSettings::default(),
        }
    }
}
