use indexmap::IndexMap;

/// Classified form of a schema. Every resolver branch switches exhaustively
/// over this tag; the only unconstrained fallback is a `Primitive` with no
/// recognized kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Primitive {
        kind: Option<String>,
        format: Option<String>,
    },
    ArrayOf(Box<SchemaNode>),
    ObjectInline(InlineObject),
    /// Reference to a named schema in the same document. Unresolved names
    /// are not validated here; they surface as a bare type name in output.
    Ref(String),
    EnumOf(Vec<serde_json::Value>),
    /// `allOf` composition: `$ref` parts become bases (encounter order),
    /// inline parts are merged into a single inline object.
    Composite {
        bases: Vec<String>,
        inline: InlineObject,
    },
}

impl SchemaNode {
    /// The degraded node used when a schema matches no recognized shape.
    pub fn unconstrained() -> Self {
        SchemaNode::Primitive {
            kind: None,
            format: None,
        }
    }
}

/// An inline object shape: ordered properties plus the names required on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineObject {
    pub properties: IndexMap<String, SchemaNode>,
    pub required: Vec<String>,
}
