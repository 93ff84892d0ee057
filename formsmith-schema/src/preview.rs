use formsmith_model::FieldInstance;
use indexmap::IndexMap;

/// Form data keyed by field name, in field order.
pub type FormData = IndexMap<String, serde_json::Value>;

/// Starting data for the preview form: each field's `defaultValue` by name.
///
/// Fields without a default are left out, as the preview renders them empty.
#[must_use]
pub fn initial_form_data(fields: &[FieldInstance]) -> FormData {
    fields
        .iter()
        .filter_map(|f| {
            f.config
                .default_value
                .as_ref()
                .map(|v| (f.name().to_string(), v.to_json()))
        })
        .collect()
}
