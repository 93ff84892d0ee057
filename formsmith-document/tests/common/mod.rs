//! Shared helpers for document tests.

#![allow(dead_code)]

use formsmith_document::{FieldId, FieldType, FormDocument};

/// Adds a field with default placement, panicking on failure.
pub fn add(doc: &mut FormDocument, field_type: FieldType) -> FieldId {
    doc.add_field(field_type, None).unwrap()
}

/// A document holding text, number, and date fields, in that order.
pub fn three_field_doc() -> (FormDocument, [FieldId; 3]) {
    let mut doc = FormDocument::new();
    let a = add(&mut doc, FieldType::Text);
    let b = add(&mut doc, FieldType::Number);
    let c = add(&mut doc, FieldType::Date);
    (doc, [a, b, c])
}

/// Field names in sequence order.
pub fn names(doc: &FormDocument) -> Vec<String> {
    doc.fields().iter().map(|f| f.name().to_string()).collect()
}

/// Property names of the derived data schema, in order.
pub fn schema_names(doc: &FormDocument) -> Vec<String> {
    doc.data_schema().property_names().map(str::to_string).collect()
}

/// Scopes of the derived UI schema, in order.
pub fn ui_scopes(doc: &FormDocument) -> Vec<String> {
    doc.ui_schema().elements.into_iter().map(|e| e.scope).collect()
}
