//! Field registry: default configurations for newly placed fields.
//!
//! Everything here is a pure function of the field type and the names already
//! in use. Nothing is cached; call it again for every add.

use crate::{DefaultKind, DefaultValue, FieldConfig, FieldInstance, FieldType};
use std::collections::HashSet;

/// Placeholder choices for a fresh radio group or dropdown.
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Builds the starting configuration for a new field of `field_type`.
///
/// The generated name is unique against `existing`.
#[must_use]
pub fn default_config(field_type: &FieldType, existing: &[FieldInstance]) -> FieldConfig {
    let name = unique_name(field_type.as_str(), existing.iter().map(FieldInstance::name));
    let descriptor = field_type.descriptor();

    FieldConfig {
        name,
        label: Some(field_type.default_label()),
        required: false,
        placeholder: descriptor.placeholder.then(String::new),
        options: descriptor
            .options
            .then(|| DEFAULT_OPTIONS.iter().map(|o| o.to_string()).collect()),
        default_value: descriptor.default_value.map(|kind| match kind {
            DefaultKind::Text => DefaultValue::Text(String::new()),
            DefaultKind::Flag => DefaultValue::Flag(false),
        }),
    }
}

/// Returns `"{base}{n}"` for the smallest `n >= 1` not already taken.
#[must_use]
pub fn unique_name<'a>(base: &str, taken: impl IntoIterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = taken.into_iter().collect();
    let mut suffix = 1usize;
    loop {
        let candidate = format!("{base}{suffix}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        suffix += 1;
    }
}
