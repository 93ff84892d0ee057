use crate::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Shape of the editor grid.
///
/// Deserializes from the `[grid]` table of the builder config; missing keys
/// fall back to [`GridSettings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Number of columns across the canvas.
    pub columns: u32,
    /// Column span given to a new field.
    pub default_width: u32,
    /// Canvas width in pixels, for pointer conversion.
    pub canvas_width_px: f64,
    /// Height of one grid row in pixels.
    pub row_height_px: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: 12,
            default_width: 4,
            canvas_width_px: 1200.0,
            row_height_px: 40.0,
        }
    }
}

impl GridSettings {
    /// Checks the settings describe a usable grid.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.columns == 0 {
            return Err(LayoutError::InvalidSettings("columns must be at least 1".into()));
        }
        if self.default_width == 0 {
            return Err(LayoutError::InvalidSettings(
                "default_width must be at least 1".into(),
            ));
        }
        if self.default_width > self.columns {
            return Err(LayoutError::InvalidSettings(format!(
                "default_width {} exceeds {} columns",
                self.default_width, self.columns
            )));
        }
        if !(self.canvas_width_px.is_finite() && self.canvas_width_px > 0.0) {
            return Err(LayoutError::InvalidSettings(
                "canvas_width_px must be a positive number".into(),
            ));
        }
        if !(self.row_height_px.is_finite() && self.row_height_px > 0.0) {
            return Err(LayoutError::InvalidSettings(
                "row_height_px must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Pixel width of one column.
    #[must_use]
    pub fn cell_width_px(&self) -> f64 {
        self.canvas_width_px / f64::from(self.columns)
    }
}
