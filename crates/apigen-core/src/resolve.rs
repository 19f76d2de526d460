use indexmap::IndexSet;

use crate::ir::{InlineObject, SchemaNode};

/// A resolved type expression plus the named schemas it depends on, in
/// first-encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub expr: String,
    pub refs: IndexSet<String>,
}

/// Map a schema node to its TypeScript type expression and collect the named
/// schemas it references.
///
/// `owner` is the schema being declared: a direct self-reference is still
/// rendered as the type name but excluded from `refs`, so a self-import is
/// never generated. References are never dereferenced here, so resolution
/// always terminates on the finite inline structure of the node.
pub fn resolve(node: &SchemaNode, owner: &str) -> ResolvedType {
    let mut refs = IndexSet::new();
    let expr = resolve_into(node, owner, &mut refs);
    ResolvedType { expr, refs }
}

fn resolve_into(node: &SchemaNode, owner: &str, refs: &mut IndexSet<String>) -> String {
    match node {
        SchemaNode::Primitive { kind, format } => primitive_expr(kind.as_deref(), format.as_deref()).to_string(),
        SchemaNode::Ref(name) => {
            if name != owner {
                refs.insert(name.clone());
            }
            name.clone()
        }
        SchemaNode::ArrayOf(element) => {
            let inner = resolve_into(element, owner, refs);
            format!("{inner}[]")
        }
        SchemaNode::EnumOf(values) => {
            let literals: Vec<String> = values.iter().map(enum_literal).collect();
            literals.join(" | ")
        }
        SchemaNode::ObjectInline(inline) => inline_expr(inline, owner, refs),
        SchemaNode::Composite { bases, inline } => {
            // Nested composite: no extends clause is available, so render it
            // as an intersection of the bases and the inline body.
            let mut parts = Vec::new();
            for base in bases {
                if base != owner {
                    refs.insert(base.clone());
                }
                parts.push(base.clone());
            }
            parts.push(inline_expr(inline, owner, refs));
            parts.join(" & ")
        }
    }
}

/// Inline objects render every property as always-present; optional markers
/// only exist on top-level declarations.
fn inline_expr(inline: &InlineObject, owner: &str, refs: &mut IndexSet<String>) -> String {
    if inline.properties.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<String> = inline
        .properties
        .iter()
        .map(|(name, prop)| {
            let expr = resolve_into(prop, owner, refs);
            format!("{name}: {expr}")
        })
        .collect();
    format!("{{ {} }}", fields.join("; "))
}

fn primitive_expr(kind: Option<&str>, format: Option<&str>) -> &'static str {
    match kind {
        Some("string") => match format {
            Some("date" | "date-time") => "Date",
            _ => "string",
        },
        Some("number") | Some("integer") => "number",
        Some("boolean") => "boolean",
        _ => "any",
    }
}

/// String values become quoted literals; other JSON literals are kept as-is.
fn enum_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}
