//! Export artifacts: `schema.json` and `uischema.json`.

use crate::DocumentResult;
use formsmith_schema::{DataSchema, UiSchema};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the exported data schema.
pub const SCHEMA_FILE: &str = "schema.json";
/// File name of the exported UI schema.
pub const UI_SCHEMA_FILE: &str = "uischema.json";

/// Both export documents, rendered as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub schema_json: String,
    pub uischema_json: String,
}

impl ExportBundle {
    /// Renders both schemas.
    pub fn render(schema: &DataSchema, ui_schema: &UiSchema) -> DocumentResult<Self> {
        Ok(Self {
            schema_json: serde_json::to_string_pretty(schema)?,
            uischema_json: serde_json::to_string_pretty(ui_schema)?,
        })
    }

    /// Writes `schema.json` and `uischema.json` into `dir`, overwriting any
    /// existing files. Returns the two paths written.
    pub fn write_to(&self, dir: &Path) -> DocumentResult<(PathBuf, PathBuf)> {
        let schema_path = dir.join(SCHEMA_FILE);
        let ui_path = dir.join(UI_SCHEMA_FILE);
        fs::write(&schema_path, &self.schema_json)?;
        fs::write(&ui_path, &self.uischema_json)?;
        info!(dir = %dir.display(), "Schemas exported");
        Ok((schema_path, ui_path))
    }
}
