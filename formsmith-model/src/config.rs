use serde::{Deserialize, Serialize};

/// The named attributes of one form field.
///
/// Which optional attributes are present depends on the field type: text-like
/// types carry a `placeholder`, choice types carry `options`. The registry
/// fills in the right shape when a field is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Property key in the data schema. Unique within a document.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

impl FieldConfig {
    /// A config carrying only a name; everything else absent or false.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            required: false,
            placeholder: None,
            options: None,
            default_value: None,
        }
    }

    /// The label, if set and non-empty.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// The placeholder, if set and non-empty.
    #[must_use]
    pub fn display_placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|p| !p.is_empty())
    }
}

/// A field's initial value: text for most types, a flag for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Flag(bool),
    Text(String),
}

impl DefaultValue {
    /// The value as it appears in form data.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Flag(b) => serde_json::Value::Bool(*b),
            Self::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A shallow partial update for a [`FieldConfig`].
///
/// Each `Some` attribute overwrites the stored one; `None` keeps it. Patches
/// arrive from the property editor as JSON objects with the same camelCase
/// keys as the config itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

impl FieldConfigPatch {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Returns true if the patch supplies no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the supplied attributes into `config`.
    pub fn apply_to(&self, config: &mut FieldConfig) {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(label) = &self.label {
            config.label = Some(label.clone());
        }
        if let Some(required) = self.required {
            config.required = required;
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = Some(placeholder.clone());
        }
        if let Some(options) = &self.options {
            config.options = Some(options.clone());
        }
        if let Some(default_value) = &self.default_value {
            config.default_value = Some(default_value.clone());
        }
    }
}
