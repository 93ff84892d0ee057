//! Shared field builders for schema tests.

#![allow(dead_code)]

use formsmith_model::{FieldConfig, FieldInstance, FieldType, registry};

/// A field with registry defaults, named after the given `name`.
pub fn field(field_type: FieldType, name: &str) -> FieldInstance {
    let mut config = registry::default_config(&field_type, &[]);
    config.name = name.to_string();
    FieldInstance::new(field_type, config)
}

/// A field carrying nothing but a name.
pub fn bare(field_type: FieldType, name: &str) -> FieldInstance {
    FieldInstance::new(field_type, FieldConfig::named(name))
}

/// A required text field with a label.
pub fn required_text(name: &str, label: &str) -> FieldInstance {
    let mut f = bare(FieldType::Text, name);
    f.config.label = Some(label.to_string());
    f.config.required = true;
    f
}
