use formsmith_model::{FieldInstance, JsonType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root `type` of a data schema. Always `"object"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootType {
    #[default]
    Object,
}

/// The exported `schema.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSchema {
    #[serde(rename = "type")]
    pub root_type: RootType,
    /// One property per field, keyed by field name, in field order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required fields. Omitted from JSON when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// One entry under `properties`.
///
/// Field order is the serialized key order: type constraints first, then
/// the display annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub json_type: JsonType,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Maps one field to its data-schema property via the type's descriptor.
#[must_use]
pub fn property_for(field: &FieldInstance) -> PropertySchema {
    let rule = field.field_type.descriptor().schema;
    let config = &field.config;

    let enum_values = if rule.enumerated {
        config.options.clone().filter(|o| !o.is_empty())
    } else {
        None
    };

    PropertySchema {
        json_type: rule.json_type,
        enum_values,
        format: rule.format.map(str::to_string),
        title: config.display_label().map(str::to_string),
        description: config.display_placeholder().map(str::to_string),
    }
}

/// Derives the data schema for `fields`.
///
/// Names are expected to be unique. If two fields share a name anyway, the
/// later one wins: its property replaces the earlier one in the earlier
/// one's position, and its `required` flag decides membership in `required`.
#[must_use]
pub fn generate_data_schema(fields: &[FieldInstance]) -> DataSchema {
    let mut properties: IndexMap<String, PropertySchema> = IndexMap::with_capacity(fields.len());
    let mut required: IndexMap<&str, bool> = IndexMap::new();

    for field in fields {
        let name = field.name();
        if properties.insert(name.to_string(), property_for(field)).is_some() {
            warn!(name = %name, "Duplicate field name in schema input; last field wins");
        }
        required.insert(name, field.config.required);
    }

    DataSchema {
        root_type: RootType::Object,
        properties,
        required: required
            .into_iter()
            .filter(|(_, is_required)| *is_required)
            .map(|(name, _)| name.to_string())
            .collect(),
    }
}

impl DataSchema {
    /// Property names in field order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Returns true if `name` is listed as required.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}
