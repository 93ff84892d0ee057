use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a form field.
///
/// Serializes as its lowercase name (`"text"`, `"dropdown"`, …). Any other
/// string deserializes into [`FieldType::Other`] so that documents carrying
/// field types this build does not know about still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Checkbox,
    Radio,
    Dropdown,
    Date,
    /// A type without a built-in descriptor. Gets the generic fallback.
    Other(String),
}

impl FieldType {
    /// Built-in types in palette order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Dropdown,
        FieldType::Date,
    ];

    /// The wire name of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Dropdown => "dropdown",
            Self::Date => "date",
            Self::Other(name) => name,
        }
    }

    /// Returns true for types with a built-in descriptor.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Looks up the descriptor for this type.
    #[must_use]
    pub fn descriptor(&self) -> &'static FieldDescriptor {
        match self {
            Self::Text => &TEXT,
            Self::Textarea => &TEXTAREA,
            Self::Number => &NUMBER,
            Self::Checkbox => &CHECKBOX,
            Self::Radio => &RADIO,
            Self::Dropdown => &DROPDOWN,
            Self::Date => &DATE,
            Self::Other(_) => &GENERIC,
        }
    }

    /// Label shown on the palette entry for this type.
    #[must_use]
    pub fn palette_label(&self) -> String {
        match self.descriptor().palette_label {
            Some(label) => label.to_string(),
            None => self.as_str().to_string(),
        }
    }

    /// Label given to a freshly added field of this type.
    #[must_use]
    pub fn default_label(&self) -> String {
        match self.descriptor().default_label {
            Some(label) => label.to_string(),
            None => format!("{} field", self.as_str()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "dropdown" => Self::Dropdown,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        match t {
            FieldType::Other(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl FromStr for FieldType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Everything that varies per field type, in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// `None` means "use the type name".
    pub palette_label: Option<&'static str>,
    /// `None` means `"<type> field"`.
    pub default_label: Option<&'static str>,
    /// Text-like types carry a `placeholder`.
    pub placeholder: bool,
    /// Choice types carry an `options` list.
    pub options: bool,
    /// Shape of `defaultValue`, if the type has one.
    pub default_value: Option<DefaultKind>,
    pub schema: SchemaRule,
    /// Rows a new field spans when the caller gives no explicit geometry.
    pub default_height: u32,
    pub height: HeightPolicy,
}

/// Shape of a field type's `defaultValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKind {
    /// Empty string.
    Text,
    /// `false`.
    Flag,
}

/// How a field type maps onto a data-schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRule {
    pub json_type: JsonType,
    /// Value for the `format` annotation, e.g. `"date"`.
    pub format: Option<&'static str>,
    /// Emit `enum` from the field's options when non-empty.
    pub enumerated: bool,
}

/// JSON Schema primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Boolean,
}

/// Row-span constraint for a field type on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HeightPolicy {
    /// Always exactly this many rows (min = max).
    Fixed { rows: u32 },
    /// Any span within `min..=max`.
    Range { min: u32, max: u32 },
}

impl HeightPolicy {
    /// Smallest allowed span.
    #[must_use]
    pub fn min(&self) -> u32 {
        match *self {
            Self::Fixed { rows } => rows,
            Self::Range { min, .. } => min,
        }
    }

    /// Largest allowed span.
    #[must_use]
    pub fn max(&self) -> u32 {
        match *self {
            Self::Fixed { rows } => rows,
            Self::Range { max, .. } => max,
        }
    }

    /// Forces a requested span into the allowed range.
    #[must_use]
    pub fn clamp(&self, rows: u32) -> u32 {
        rows.clamp(self.min(), self.max())
    }

    /// Returns true if the span may be changed by resizing.
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.min() != self.max()
    }
}

const SINGLE_ROW: HeightPolicy = HeightPolicy::Fixed { rows: 1 };
const FREE_ROWS: HeightPolicy = HeightPolicy::Range { min: 1, max: 12 };

const STRING: SchemaRule = SchemaRule {
    json_type: JsonType::String,
    format: None,
    enumerated: false,
};

static TEXT: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Text Input"),
    default_label: Some("Text field"),
    placeholder: true,
    options: false,
    default_value: Some(DefaultKind::Text),
    schema: STRING,
    default_height: 1,
    height: SINGLE_ROW,
};

static TEXTAREA: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Text Area"),
    default_label: Some("Textarea"),
    placeholder: true,
    options: false,
    default_value: Some(DefaultKind::Text),
    schema: STRING,
    default_height: 2,
    height: FREE_ROWS,
};

static NUMBER: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Number"),
    default_label: Some("Number field"),
    placeholder: true,
    options: false,
    default_value: Some(DefaultKind::Text),
    schema: SchemaRule {
        json_type: JsonType::Number,
        format: None,
        enumerated: false,
    },
    default_height: 1,
    height: SINGLE_ROW,
};

static CHECKBOX: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Checkbox"),
    default_label: Some("Checkbox"),
    placeholder: false,
    options: false,
    default_value: Some(DefaultKind::Flag),
    schema: SchemaRule {
        json_type: JsonType::Boolean,
        format: None,
        enumerated: false,
    },
    default_height: 2,
    height: FREE_ROWS,
};

static RADIO: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Radio Group"),
    default_label: Some("Radio Group"),
    placeholder: false,
    options: true,
    default_value: Some(DefaultKind::Text),
    schema: SchemaRule {
        json_type: JsonType::String,
        format: None,
        enumerated: true,
    },
    default_height: 2,
    height: FREE_ROWS,
};

static DROPDOWN: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Dropdown"),
    default_label: Some("Dropdown"),
    placeholder: false,
    options: true,
    default_value: Some(DefaultKind::Text),
    schema: SchemaRule {
        json_type: JsonType::String,
        format: None,
        enumerated: true,
    },
    default_height: 1,
    height: SINGLE_ROW,
};

static DATE: FieldDescriptor = FieldDescriptor {
    palette_label: Some("Date Picker"),
    default_label: Some("Date Picker"),
    placeholder: false,
    options: false,
    default_value: Some(DefaultKind::Text),
    schema: SchemaRule {
        json_type: JsonType::String,
        format: Some("date"),
        enumerated: false,
    },
    default_height: 1,
    height: SINGLE_ROW,
};

// Unknown types: label + required only, rendered as a plain string.
static GENERIC: FieldDescriptor = FieldDescriptor {
    palette_label: None,
    default_label: None,
    placeholder: false,
    options: false,
    default_value: None,
    schema: STRING,
    default_height: 1,
    height: FREE_ROWS,
};
