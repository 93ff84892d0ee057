use formsmith_model::FieldInstance;
use serde::{Deserialize, Serialize};

/// Root `type` of a UI schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutType {
    #[default]
    VerticalLayout,
}

/// `type` of a UI schema element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
    #[default]
    Control,
}

/// The exported `uischema.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSchema {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    pub elements: Vec<UiElement>,
}

/// A control bound to one data-schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiElement {
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub scope: String,
}

/// JSON pointer to the data-schema property for `name`.
#[must_use]
pub fn scope_for(name: &str) -> String {
    format!("#/properties/{name}")
}

/// Derives the UI schema for `fields`: one control per field, in order.
#[must_use]
pub fn generate_ui_schema(fields: &[FieldInstance]) -> UiSchema {
    UiSchema {
        layout_type: LayoutType::VerticalLayout,
        elements: fields
            .iter()
            .map(|f| UiElement {
                control_type: ControlType::Control,
                scope: scope_for(f.name()),
            })
            .collect(),
    }
}
