use formsmith_model::registry::{DEFAULT_OPTIONS, default_config, unique_name};
use formsmith_model::{DefaultValue, FieldConfig, FieldInstance, FieldType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn field(field_type: FieldType, name: &str) -> FieldInstance {
    FieldInstance::new(field_type, FieldConfig::named(name))
}

// ── Name generation ──────────────────────────────────────────────

#[test]
fn first_name_has_suffix_one() {
    let c = default_config(&FieldType::Text, &[]);
    assert_eq!(c.name, "text1");
}

#[test]
fn skips_taken_suffixes() {
    let existing = vec![field(FieldType::Text, "text1"), field(FieldType::Text, "text2")];
    assert_eq!(default_config(&FieldType::Text, &existing).name, "text3");
}

#[test]
fn fills_gaps_left_by_deleted_fields() {
    let existing = vec![field(FieldType::Text, "text1"), field(FieldType::Text, "text3")];
    assert_eq!(default_config(&FieldType::Text, &existing).name, "text2");
}

#[test]
fn names_of_other_types_do_not_interfere() {
    let existing = vec![field(FieldType::Number, "number1")];
    assert_eq!(default_config(&FieldType::Text, &existing).name, "text1");
}

#[test]
fn renamed_field_frees_the_name() {
    let existing = vec![field(FieldType::Text, "email")];
    assert_eq!(default_config(&FieldType::Text, &existing).name, "text1");
}

#[test]
fn unique_name_over_plain_strings() {
    assert_eq!(unique_name("date", ["date1", "date2", "date4"]), "date3");
}

// ── Type defaults ────────────────────────────────────────────────

#[test]
fn text_defaults() {
    let c = default_config(&FieldType::Text, &[]);
    assert_eq!(c.label.as_deref(), Some("Text field"));
    assert_eq!(c.placeholder.as_deref(), Some(""));
    assert_eq!(c.default_value, Some(DefaultValue::Text(String::new())));
    assert!(!c.required);
    assert_eq!(c.options, None);
}

#[test]
fn checkbox_defaults_to_false() {
    let c = default_config(&FieldType::Checkbox, &[]);
    assert_eq!(c.default_value, Some(DefaultValue::Flag(false)));
    assert_eq!(c.placeholder, None);
}

#[test]
fn radio_gets_two_placeholder_options() {
    let c = default_config(&FieldType::Radio, &[]);
    let options = c.options.unwrap();
    assert_eq!(options, vec!["Option 1".to_string(), "Option 2".to_string()]);
    assert!(options.iter().all(|o| !o.is_empty()));
}

#[test]
fn dropdown_gets_default_options() {
    let c = default_config(&FieldType::Dropdown, &[]);
    let expected: Vec<String> = DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect();
    assert_eq!(c.options, Some(expected));
}

#[test]
fn date_has_no_placeholder() {
    let c = default_config(&FieldType::Date, &[]);
    assert_eq!(c.label.as_deref(), Some("Date Picker"));
    assert_eq!(c.placeholder, None);
    assert_eq!(c.default_value, Some(DefaultValue::Text(String::new())));
}

#[test]
fn unknown_type_gets_generic_config() {
    let t = FieldType::Other("signature".into());
    let c = default_config(&t, &[]);
    assert_eq!(
        c,
        FieldConfig {
            name: "signature1".into(),
            label: Some("signature field".into()),
            required: false,
            placeholder: None,
            options: None,
            default_value: None,
        }
    );
}

#[test]
fn default_config_is_deterministic() {
    let existing = vec![field(FieldType::Radio, "radio1")];
    assert_eq!(
        default_config(&FieldType::Radio, &existing),
        default_config(&FieldType::Radio, &existing)
    );
}

proptest! {
    /// Repeated adds of one type never produce a duplicate name.
    #[test]
    fn repeated_adds_stay_unique(count in 1usize..60, type_idx in 0usize..7) {
        let t = FieldType::ALL[type_idx].clone();
        let mut fields: Vec<FieldInstance> = Vec::new();
        for _ in 0..count {
            let config = default_config(&t, &fields);
            fields.push(FieldInstance::new(t.clone(), config));
        }
        let names: HashSet<&str> = fields.iter().map(FieldInstance::name).collect();
        prop_assert_eq!(names.len(), count);
    }
}
