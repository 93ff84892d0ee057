use crate::{BuilderConfig, DocumentError, DocumentResult, ExportBundle};
use formsmith_layout::{LayoutHint, LayoutReconciler};
use formsmith_model::{FieldConfigPatch, FieldInstance, FieldType, Layout, registry};
use formsmith_schema::{DataSchema, FormData, UiSchema};
use formsmith_types::FieldId;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The editable form: an ordered field sequence plus the current selection.
///
/// Field order is the schema order. Grid geometry lives on each field and is
/// independent of that order.
#[derive(Debug, Clone)]
pub struct FormDocument {
    fields: Vec<FieldInstance>,
    selected: Option<FieldId>,
    reconciler: LayoutReconciler,
    revision: u64,
}

impl FormDocument {
    /// Creates an empty document with default grid settings.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            selected: None,
            reconciler: LayoutReconciler::default(),
            revision: 0,
        }
    }

    /// Creates an empty document using `config`.
    pub fn with_config(config: BuilderConfig) -> DocumentResult<Self> {
        Ok(Self {
            fields: Vec::new(),
            selected: None,
            reconciler: LayoutReconciler::new(config.grid)?,
            revision: 0,
        })
    }

    /// Restores a document from a previously captured field sequence.
    ///
    /// Rejects sequences with empty or repeated names, repeated ids, or
    /// zero-span geometry. Stored heights are clamped by each type's policy.
    pub fn from_fields(
        config: BuilderConfig,
        mut fields: Vec<FieldInstance>,
    ) -> DocumentResult<Self> {
        let mut doc = Self::with_config(config)?;
        let mut names = HashSet::with_capacity(fields.len());
        let mut ids = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name().trim().is_empty() {
                return Err(DocumentError::EmptyName);
            }
            if !names.insert(field.name()) {
                return Err(DocumentError::DuplicateName(field.name().to_string()));
            }
            if !ids.insert(field.id) {
                return Err(DocumentError::DuplicateId(field.id));
            }
        }
        for field in &mut fields {
            if let Some(layout) = field.layout {
                field.layout = Some(doc.reconciler.constrain(&field.field_type, layout)?);
            }
        }
        debug!(fields = fields.len(), "Document restored");
        doc.fields = fields;
        Ok(doc)
    }

    // ================================================================
    // Queries
    // ================================================================

    /// Fields in sequence order.
    pub fn fields(&self) -> &[FieldInstance] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Position of `id` in the field sequence.
    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    /// The selected field, if any.
    pub fn selected(&self) -> Option<&FieldInstance> {
        self.selected.and_then(|id| self.field(id))
    }

    /// Change counter for the field sequence.
    ///
    /// Bumped by every command that changes a field; rejected commands,
    /// no-ops, and selection changes leave it alone. Callers memoize derived
    /// schemas on this value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn reconciler(&self) -> &LayoutReconciler {
        &self.reconciler
    }

    // ================================================================
    // Field commands
    // ================================================================

    /// Appends a new field of `field_type` and returns its id.
    ///
    /// The config comes from the registry with a name unique in this
    /// document. The layout comes from `hint`, or the next free slot in
    /// reading order when no hint is given.
    pub fn add_field(
        &mut self,
        field_type: FieldType,
        hint: Option<LayoutHint>,
    ) -> DocumentResult<FieldId> {
        let layout = self.reconciler.resolve(&field_type, hint, &self.fields)?;
        let config = registry::default_config(&field_type, &self.fields);
        let field = FieldInstance::new(field_type, config).with_layout(layout);
        let id = field.id;

        info!(
            field_id = %id,
            field_type = %field.field_type,
            name = %field.name(),
            "Field added"
        );
        self.fields.push(field);
        self.bump();
        Ok(id)
    }

    /// Merges `patch` into the field's config.
    ///
    /// A new `name` must be non-empty and not used by any other field.
    /// `placeholder` and `options` are only accepted for types that carry
    /// them.
    pub fn update_field(&mut self, id: FieldId, patch: &FieldConfigPatch) -> DocumentResult<()> {
        let index = self.require(id)?;
        if let Some(name) = &patch.name {
            self.check_name(id, name)?;
        }
        self.check_shape(index, patch)?;
        if patch.is_empty() {
            return Ok(());
        }

        patch.apply_to(&mut self.fields[index].config);
        debug!(field_id = %id, "Field updated");
        self.bump();
        Ok(())
    }

    /// Removes a field, clearing the selection if it pointed there.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove_field(&mut self, id: FieldId) -> Option<FieldInstance> {
        let index = self.index_of(id)?;
        let removed = self.fields.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!(field_id = %id, name = %removed.name(), "Field removed");
        self.bump();
        Some(removed)
    }

    /// Moves the field at `from` so that it ends up at index `to`.
    pub fn move_field(&mut self, from: usize, to: usize) -> DocumentResult<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                warn!(index, len, "Move rejected: index out of bounds");
                return Err(DocumentError::IndexOutOfBounds { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        debug!(from, to, "Field moved");
        self.bump();
        Ok(())
    }

    /// Moves `active` into the position currently held by `over`.
    pub fn reorder(&mut self, active: FieldId, over: FieldId) -> DocumentResult<()> {
        let from = self.require(active)?;
        let to = self.require(over)?;
        self.move_field(from, to)
    }

    /// Overwrites a field's grid geometry after a drag or resize.
    ///
    /// Position and width are stored as given; height is clamped by the
    /// field type's policy. Returns the geometry actually stored.
    pub fn set_field_layout(&mut self, id: FieldId, layout: Layout) -> DocumentResult<Layout> {
        let index = self.require(id)?;
        let field = &mut self.fields[index];
        let applied = self.reconciler.constrain(&field.field_type, layout)?;
        field.layout = Some(applied);
        debug!(
            field_id = %id,
            x = applied.x,
            y = applied.y,
            w = applied.w,
            h = applied.h,
            "Field layout set"
        );
        self.bump();
        Ok(applied)
    }

    // ================================================================
    // Option list commands
    // ================================================================

    /// Replaces the option at `index`.
    pub fn set_option(
        &mut self,
        id: FieldId,
        index: usize,
        value: impl Into<String>,
    ) -> DocumentResult<()> {
        let field_index = self.require_options(id)?;
        let options = &mut self.fields[field_index].config.options;
        let len = options.as_ref().map_or(0, Vec::len);
        match options.as_mut().and_then(|o| o.get_mut(index)) {
            Some(slot) => *slot = value.into(),
            None => return Err(DocumentError::OptionIndexOutOfBounds { index, len }),
        }
        debug!(field_id = %id, index, "Option set");
        self.bump();
        Ok(())
    }

    /// Appends an empty option and returns its index.
    pub fn add_option(&mut self, id: FieldId) -> DocumentResult<usize> {
        let field_index = self.require_options(id)?;
        let options = self.fields[field_index]
            .config
            .options
            .get_or_insert_with(Vec::new);
        options.push(String::new());
        let index = options.len() - 1;
        debug!(field_id = %id, index, "Option added");
        self.bump();
        Ok(index)
    }

    /// Removes and returns the option at `index`.
    pub fn remove_option(&mut self, id: FieldId, index: usize) -> DocumentResult<String> {
        let field_index = self.require_options(id)?;
        let options = &mut self.fields[field_index].config.options;
        let len = options.as_ref().map_or(0, Vec::len);
        let removed = match options.as_mut() {
            Some(o) if index < len => o.remove(index),
            _ => return Err(DocumentError::OptionIndexOutOfBounds { index, len }),
        };
        debug!(field_id = %id, index, "Option removed");
        self.bump();
        Ok(removed)
    }

    // ================================================================
    // Selection
    // ================================================================

    /// Selects an existing field.
    pub fn select_field(&mut self, id: FieldId) -> DocumentResult<()> {
        self.require(id)?;
        self.selected = Some(id);
        debug!(field_id = %id, "Field selected");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ================================================================
    // Derived views
    // ================================================================

    /// The data schema for the current fields.
    pub fn data_schema(&self) -> DataSchema {
        formsmith_schema::generate_data_schema(&self.fields)
    }

    /// The UI schema for the current fields.
    pub fn ui_schema(&self) -> UiSchema {
        formsmith_schema::generate_ui_schema(&self.fields)
    }

    /// Starting data for the preview form.
    pub fn initial_data(&self) -> FormData {
        formsmith_schema::initial_form_data(&self.fields)
    }

    /// Renders both export documents.
    pub fn export(&self) -> DocumentResult<ExportBundle> {
        ExportBundle::render(&self.data_schema(), &self.ui_schema())
    }

    // ================================================================
    // Internals
    // ================================================================

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn require(&self, id: FieldId) -> DocumentResult<usize> {
        self.index_of(id).ok_or_else(|| {
            warn!(field_id = %id, "Command rejected: field not found");
            DocumentError::NotFound(id)
        })
    }

    fn require_options(&self, id: FieldId) -> DocumentResult<usize> {
        let index = self.require(id)?;
        let field_type = &self.fields[index].field_type;
        if !field_type.descriptor().options {
            warn!(field_id = %id, field_type = %field_type, "Command rejected: type has no options");
            return Err(DocumentError::OptionsNotSupported(field_type.clone()));
        }
        Ok(index)
    }

    fn check_shape(&self, index: usize, patch: &FieldConfigPatch) -> DocumentResult<()> {
        let field = &self.fields[index];
        let descriptor = field.field_type.descriptor();
        if patch.placeholder.is_some() && !descriptor.placeholder {
            warn!(
                field_id = %field.id,
                field_type = %field.field_type,
                "Command rejected: type has no placeholder"
            );
            return Err(DocumentError::PlaceholderNotSupported(field.field_type.clone()));
        }
        if patch.options.is_some() && !descriptor.options {
            warn!(
                field_id = %field.id,
                field_type = %field.field_type,
                "Command rejected: type has no options"
            );
            return Err(DocumentError::OptionsNotSupported(field.field_type.clone()));
        }
        Ok(())
    }

    fn check_name(&self, id: FieldId, name: &str) -> DocumentResult<()> {
        if name.trim().is_empty() {
            warn!(field_id = %id, "Command rejected: empty name");
            return Err(DocumentError::EmptyName);
        }
        if self.fields.iter().any(|f| f.id != id && f.name() == name) {
            warn!(field_id = %id, name = %name, "Command rejected: duplicate name");
            return Err(DocumentError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}
