//! Builder configuration.

use crate::DocumentResult;
use formsmith_layout::GridSettings;
use serde::{Deserialize, Serialize};

/// Settings a host passes when creating a document.
///
/// ```toml
/// [grid]
/// columns = 12
/// default_width = 4
/// canvas_width_px = 1200.0
/// row_height_px = 40.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub grid: GridSettings,
}

impl BuilderConfig {
    /// Parses and validates a TOML config. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> DocumentResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> DocumentResult<()> {
        self.grid.validate()?;
        Ok(())
    }
}
