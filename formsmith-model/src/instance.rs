use crate::{FieldConfig, FieldType, Layout};
use formsmith_types::FieldId;
use serde::{Deserialize, Serialize};

/// One field placed in a form document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInstance {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub config: FieldConfig,
    /// Grid placement. Absent when the document is laid out by order only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl FieldInstance {
    /// Creates an instance with a fresh id and no layout.
    #[must_use]
    pub fn new(field_type: FieldType, config: FieldConfig) -> Self {
        Self {
            id: FieldId::new(),
            field_type,
            config,
            layout: None,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Shorthand for `config.name`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }
}
