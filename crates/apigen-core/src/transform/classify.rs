use indexmap::IndexMap;

use crate::ir::{InlineObject, SchemaNode};
use crate::parse::schema::{Schema, SchemaOrRef};

/// Classify a raw schema into its tagged variant.
///
/// Total: a shape that matches no recognized variant degrades to an
/// unconstrained node instead of failing, so one malformed schema never
/// aborts the rest of the document. Each degradation pushes a message onto
/// `warnings`; the caller decides where those surface.
pub fn classify(schema_or_ref: &SchemaOrRef, warnings: &mut Vec<String>) -> SchemaNode {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => SchemaNode::Ref(ref_name(ref_path)),
        SchemaOrRef::Schema(schema) => classify_schema(schema, warnings),
        SchemaOrRef::Unknown(_) => {
            warnings.push("unrecognized schema shape, treating as unconstrained".to_string());
            SchemaNode::unconstrained()
        }
    }
}

fn classify_schema(schema: &Schema, warnings: &mut Vec<String>) -> SchemaNode {
    if !schema.enum_values.is_empty() {
        return SchemaNode::EnumOf(schema.enum_values.clone());
    }

    if !schema.all_of.is_empty() {
        return classify_all_of(schema, warnings);
    }

    match schema.schema_type.as_deref() {
        Some("array") => {
            let element = match &schema.items {
                Some(items) => classify(items, warnings),
                None => SchemaNode::unconstrained(),
            };
            SchemaNode::ArrayOf(Box::new(element))
        }
        Some("object") => SchemaNode::ObjectInline(inline_object(schema, warnings)),
        Some("string") | Some("number") | Some("integer") | Some("boolean") => {
            SchemaNode::Primitive {
                kind: schema.schema_type.clone(),
                format: schema.format.clone(),
            }
        }
        Some(other) => {
            warnings.push(format!(
                "unrecognized schema type `{other}`, treating as unconstrained"
            ));
            SchemaNode::unconstrained()
        }
        None => {
            // No explicit type: properties imply an object, items an array.
            if !schema.properties.is_empty() {
                SchemaNode::ObjectInline(inline_object(schema, warnings))
            } else if let Some(items) = &schema.items {
                SchemaNode::ArrayOf(Box::new(classify(items, warnings)))
            } else {
                SchemaNode::unconstrained()
            }
        }
    }
}

/// Split `allOf` parts into `$ref` bases and one merged inline object.
///
/// Required-ness merges only from the inline parts' own `required` lists
/// (plus sibling `properties`/`required` on the composite schema itself);
/// a `$ref` base contributes nothing to the merged set — the generated type
/// inherits it structurally through the extends clause.
fn classify_all_of(schema: &Schema, warnings: &mut Vec<String>) -> SchemaNode {
    let mut bases = Vec::new();
    let mut inline = InlineObject::default();

    for part in &schema.all_of {
        match part {
            SchemaOrRef::Ref { ref_path } => bases.push(ref_name(ref_path)),
            SchemaOrRef::Schema(part) => merge_inline(&mut inline, part, warnings),
            SchemaOrRef::Unknown(_) => {
                warnings.push("unrecognized allOf part, skipping it".to_string());
            }
        }
    }

    if !schema.properties.is_empty() || !schema.required.is_empty() {
        merge_inline(&mut inline, schema, warnings);
    }

    SchemaNode::Composite { bases, inline }
}

fn merge_inline(inline: &mut InlineObject, part: &Schema, warnings: &mut Vec<String>) {
    for (name, prop) in &part.properties {
        inline.properties.insert(name.clone(), classify(prop, warnings));
    }
    for name in &part.required {
        if !inline.required.contains(name) {
            inline.required.push(name.clone());
        }
    }
}

fn inline_object(schema: &Schema, warnings: &mut Vec<String>) -> InlineObject {
    let properties: IndexMap<String, SchemaNode> = schema
        .properties
        .iter()
        .map(|(name, prop)| (name.clone(), classify(prop, warnings)))
        .collect();
    InlineObject {
        properties,
        required: schema.required.clone(),
    }
}

/// `$ref` values resolve by final path segment only; there is no
/// cross-document resolution.
fn ref_name(ref_path: &str) -> String {
    ref_path.rsplit('/').next().unwrap_or(ref_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn schema_of(yaml: &str, name: &str) -> (SchemaNode, Vec<String>) {
        let spec = parse::from_yaml(yaml).unwrap();
        let components = spec.components.unwrap();
        let mut warnings = Vec::new();
        let node = classify(components.schemas.get(name).unwrap(), &mut warnings);
        (node, warnings)
    }

    #[test]
    fn ref_takes_final_segment() {
        let (node, warnings) = schema_of(
            "components:\n  schemas:\n    A:\n      $ref: '#/components/schemas/Pet'\n",
            "A",
        );
        assert_eq!(node, SchemaNode::Ref("Pet".to_string()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn enum_wins_over_type() {
        let (node, _) = schema_of(
            "components:\n  schemas:\n    Status:\n      type: string\n      enum: [available, pending]\n",
            "Status",
        );
        match node {
            SchemaNode::EnumOf(values) => assert_eq!(values.len(), 2),
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn all_of_splits_bases_and_merges_inline_required() {
        let yaml = r#"
components:
  schemas:
    Dog:
      allOf:
        - $ref: '#/components/schemas/Animal'
        - type: object
          properties:
            bark:
              type: boolean
          required: [bark]
        - type: object
          properties:
            breed:
              type: string
"#;
        match schema_of(yaml, "Dog").0 {
            SchemaNode::Composite { bases, inline } => {
                assert_eq!(bases, vec!["Animal".to_string()]);
                let props: Vec<_> = inline.properties.keys().cloned().collect();
                assert_eq!(props, vec!["bark", "breed"]);
                assert_eq!(inline.required, vec!["bark"]);
            }
            other => panic!("expected composite, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_degrades_with_warning() {
        let (node, warnings) = schema_of(
            "components:\n  schemas:\n    Odd:\n      type: zorp\n",
            "Odd",
        );
        assert_eq!(node, SchemaNode::unconstrained());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("zorp"));
    }

    #[test]
    fn malformed_schema_degrades_with_warning() {
        let (node, warnings) = schema_of(
            "components:\n  schemas:\n    Bad:\n      enum: 5\n",
            "Bad",
        );
        assert_eq!(node, SchemaNode::unconstrained());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unrecognized schema shape"));
    }

    #[test]
    fn untyped_properties_imply_object() {
        let (node, _) = schema_of(
            "components:\n  schemas:\n    Loose:\n      properties:\n        id:\n          type: string\n",
            "Loose",
        );
        assert!(matches!(node, SchemaNode::ObjectInline(_)));
    }

    #[test]
    fn array_without_items_has_unconstrained_element() {
        let (node, _) = schema_of(
            "components:\n  schemas:\n    Bag:\n      type: array\n",
            "Bag",
        );
        assert_eq!(
            node,
            SchemaNode::ArrayOf(Box::new(SchemaNode::unconstrained()))
        );
    }

    #[test]
    fn scalar_property_value_degrades_to_unconstrained() {
        let yaml = "components:\n  schemas:\n    Loose:\n      type: object\n      properties:\n        id: 7\n";
        let (node, warnings) = schema_of(yaml, "Loose");
        match node {
            SchemaNode::ObjectInline(inline) => {
                assert_eq!(inline.properties["id"], SchemaNode::unconstrained());
            }
            other => panic!("expected object, got {other:?}"),
        }
        assert_eq!(warnings.len(), 1);
    }
}
