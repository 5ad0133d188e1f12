use std::{collections::BTreeSet, fmt, sync::Arc};

use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Catalogue category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Core,
    Layout,
    Sections,
    Advanced,
    #[default]
    Custom,
}

impl ComponentCategory {
    /// Fixed documentation order
    pub const ALL: [ComponentCategory; 5] = [
        ComponentCategory::Core,
        ComponentCategory::Layout,
        ComponentCategory::Sections,
        ComponentCategory::Advanced,
        ComponentCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Core => "core",
            ComponentCategory::Layout => "layout",
            ComponentCategory::Sections => "sections",
            ComponentCategory::Advanced => "advanced",
            ComponentCategory::Custom => "custom",
        }
    }

    /// Section heading used in generated documentation
    pub fn title(&self) -> &'static str {
        match self {
            ComponentCategory::Core => "Core Components",
            ComponentCategory::Layout => "Layout Components",
            ComponentCategory::Sections => "Section Components",
            ComponentCategory::Advanced => "Advanced Components",
            ComponentCategory::Custom => "Custom Components",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prop type, with the data each type carries.
///
/// Serialized as a `type` tag next to an `options` list. A prop without a
/// `type` reads back as [`PropKind::String`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropKind {
    String,
    Number,
    Boolean,
    /// One of a fixed list of values
    Enum {
        #[serde(default)]
        options: Vec<Value>,
    },
    /// Structured value with named sub-fields
    Object {
        #[serde(default)]
        options: Vec<ComponentPropSpec>,
    },
    /// List of structured values
    Array {
        #[serde(default)]
        options: Vec<ComponentPropSpec>,
    },
    Color,
    File,
    Url,
    LongText,
}

const PROP_KIND_NAMES: &[&str] = &[
    "string", "number", "boolean", "enum", "object", "array", "color", "file", "url", "longText",
];

#[derive(Deserialize)]
struct PropKindFields {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    options: Option<Value>,
}

fn parse_options<T, E>(options: Option<Value>) -> std::result::Result<Vec<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    match options {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(E::custom),
    }
}

impl<'de> Deserialize<'de> for PropKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let PropKindFields { kind, options } = PropKindFields::deserialize(deserializer)?;
        let kind = match kind.as_deref() {
            None | Some("string") => PropKind::String,
            Some("number") => PropKind::Number,
            Some("boolean") => PropKind::Boolean,
            Some("enum") => PropKind::Enum {
                options: parse_options(options)?,
            },
            Some("object") => PropKind::Object {
                options: parse_options(options)?,
            },
            Some("array") => PropKind::Array {
                options: parse_options(options)?,
            },
            Some("color") => PropKind::Color,
            Some("file") => PropKind::File,
            Some("url") => PropKind::Url,
            Some("longText") => PropKind::LongText,
            Some(other) => {
                return Err(<D::Error as de::Error>::unknown_variant(other, PROP_KIND_NAMES));
            }
        };
        Ok(kind)
    }
}

// A present `null` stays `Some(Value::Null)`; only a missing key is `None`.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PropKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropKind::String => "string",
            PropKind::Number => "number",
            PropKind::Boolean => "boolean",
            PropKind::Enum { .. } => "enum",
            PropKind::Object { .. } => "object",
            PropKind::Array { .. } => "array",
            PropKind::Color => "color",
            PropKind::File => "file",
            PropKind::Url => "url",
            PropKind::LongText => "longText",
        }
    }
}

/// Outcome of a custom validation predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid,
    /// Invalid, with a message reported verbatim
    Message(String),
}

impl From<bool> for ValidationOutcome {
    fn from(valid: bool) -> Self {
        if valid {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid
        }
    }
}

impl From<String> for ValidationOutcome {
    fn from(message: String) -> Self {
        ValidationOutcome::Message(message)
    }
}

impl From<&str> for ValidationOutcome {
    fn from(message: &str) -> Self {
        ValidationOutcome::Message(message.to_string())
    }
}

/// Custom validation predicate attached to a prop.
///
/// Not serialized: exported catalogues drop it and imported props have none.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&Value) -> ValidationOutcome + Send + Sync>);

impl CustomValidator {
    pub fn new<F, O>(check: F) -> Self
    where
        F: Fn(&Value) -> O + Send + Sync + 'static,
        O: Into<ValidationOutcome>,
    {
        Self(Arc::new(move |value| check(value).into()))
    }

    pub fn check(&self, value: &Value) -> ValidationOutcome {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

impl PartialEq for CustomValidator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Constraints checked by `validate_props`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regular expression a string value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip)]
    pub custom: Option<CustomValidator>,
}

impl PropValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_custom(mut self, custom: CustomValidator) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// Display rule: the prop only applies while `depends_on` holds one of `values`.
///
/// Stored and exported, never enforced by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalSpec {
    pub depends_on: String,
    pub values: Vec<Value>,
}

/// One configurable input of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPropSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: PropKind,
    #[serde(default)]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PropValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

impl ComponentPropSpec {
    pub fn new(name: impl Into<String>, kind: PropKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default_value: None,
            validation: None,
            conditional: None,
            helper_text: None,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_validation(mut self, validation: PropValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_conditional(mut self, depends_on: impl Into<String>, values: Vec<Value>) -> Self {
        self.conditional = Some(ConditionalSpec {
            depends_on: depends_on.into(),
            values,
        });
        self
    }

    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }
}

/// Usage example shown in documentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentExample {
    pub name: String,
    pub description: String,
    pub props: Map<String, Value>,
    /// Hand-written snippet; generated from `props` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ComponentExample {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_props(mut self, props: Map<String, Value>) -> Self {
        self.props = props;
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Catalogue entry.
///
/// Every field defaults when absent so that partially specified entries can
/// still be imported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentConfig {
    /// Unique catalogue key
    pub name: String,
    pub display_name: String,
    pub category: ComponentCategory,
    pub description: String,
    pub icon: String,
    pub version: String,
    pub tags: BTreeSet<String>,
    pub props: Vec<ComponentPropSpec>,
    /// Whether the component accepts nested children
    pub children: bool,
    pub examples: Vec<ComponentExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ComponentConfig {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            category,
            version: "1.0.0".to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_prop(mut self, prop: ComponentPropSpec) -> Self {
        self.props.push(prop);
        self
    }

    pub fn with_children(mut self, children: bool) -> Self {
        self.children = children;
        self
    }

    pub fn with_example(mut self, example: ComponentExample) -> Self {
        self.examples.push(example);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn prop(&self, name: &str) -> Option<&ComponentPropSpec> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// Result of `validate_props`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
