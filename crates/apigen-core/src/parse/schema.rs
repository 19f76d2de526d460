use indexmap::IndexMap;
use serde::Deserialize;

/// A reference or inline schema.
///
/// The `Unknown` arm is last so any value that matches neither shape — a
/// wrong-typed field, a scalar where an object belongs — still deserializes
/// and degrades during classification instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
    Unknown(serde_json::Value),
}

/// A schema object, reduced to the subset generation consumes.
///
/// `type` stays a free-form string so that an unrecognized keyword degrades
/// to an unconstrained type during classification instead of failing the
/// whole document at parse time.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    // Object properties
    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    // Array items
    #[serde(default)]
    pub items: Option<Box<SchemaOrRef>>,

    // Composition
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrRef>,

    // Enum values
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,
}
