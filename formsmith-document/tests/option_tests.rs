mod common;

use common::add;
use formsmith_document::{DocumentError, FieldId, FieldType, FormDocument};
use pretty_assertions::assert_eq;
use serde_json::json;

fn options(doc: &FormDocument, id: FieldId) -> Vec<String> {
    doc.field(id).unwrap().config.options.clone().unwrap_or_default()
}

#[test]
fn set_option_replaces_value() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Dropdown);
    doc.set_option(id, 1, "Blue").unwrap();
    assert_eq!(options(&doc, id), vec!["Option 1", "Blue"]);
}

#[test]
fn add_option_appends_empty_string() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Radio);
    assert_eq!(doc.add_option(id).unwrap(), 2);
    assert_eq!(options(&doc, id), vec!["Option 1", "Option 2", ""]);
}

#[test]
fn remove_option_returns_removed_value() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Radio);
    assert_eq!(doc.remove_option(id, 0).unwrap(), "Option 1");
    assert_eq!(options(&doc, id), vec!["Option 2"]);
}

#[test]
fn option_index_out_of_range() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Dropdown);
    let rev = doc.revision();
    assert!(matches!(
        doc.set_option(id, 5, "x"),
        Err(DocumentError::OptionIndexOutOfBounds { index: 5, len: 2 })
    ));
    assert!(matches!(
        doc.remove_option(id, 2),
        Err(DocumentError::OptionIndexOutOfBounds { index: 2, len: 2 })
    ));
    assert_eq!(doc.revision(), rev);
}

#[test]
fn options_rejected_for_non_choice_types() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Text);
    let err = doc.add_option(id).unwrap_err();
    assert!(matches!(err, DocumentError::OptionsNotSupported(FieldType::Text)));
    assert_eq!(err.to_string(), "field type 'text' does not take options");
    assert_eq!(doc.field(id).unwrap().config.options, None);
}

#[test]
fn removing_all_options_drops_enum() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Radio);
    doc.remove_option(id, 0).unwrap();
    doc.remove_option(id, 0).unwrap();
    let schema = serde_json::to_value(doc.data_schema()).unwrap();
    assert_eq!(
        schema["properties"]["radio1"],
        json!({"type": "string", "title": "Radio Group"})
    );
}

#[test]
fn edited_options_flow_into_enum() {
    let mut doc = FormDocument::new();
    let id = add(&mut doc, FieldType::Dropdown);
    doc.set_option(id, 0, "Small").unwrap();
    doc.set_option(id, 1, "Large").unwrap();
    let i = doc.add_option(id).unwrap();
    doc.set_option(id, i, "Medium").unwrap();
    let schema = serde_json::to_value(doc.data_schema()).unwrap();
    assert_eq!(
        schema["properties"]["dropdown1"]["enum"],
        json!(["Small", "Large", "Medium"])
    );
}
