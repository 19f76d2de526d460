use indexmap::IndexSet;
use minijinja::{Environment, context};

use crate::ir::{Document, InlineObject, SchemaNode};
use crate::resolve::resolve;

/// Emit `models/<Name>.ts` — one type declaration per named schema, with one
/// import line per cross-referenced name.
pub fn emit_model(name: &str, node: &SchemaNode) -> String {
    let (imports, declaration_lines) = match node {
        SchemaNode::EnumOf(_) => {
            let resolved = resolve(node, name);
            (Vec::new(), vec![format!("export type {name} = {};", resolved.expr)])
        }
        SchemaNode::Composite { bases, inline } => interface_declaration(name, bases, inline),
        SchemaNode::ObjectInline(inline) => interface_declaration(name, &[], inline),
        // Ref, array, and primitive schemas become plain type aliases.
        other => {
            let resolved = resolve(other, name);
            (
                resolved.refs.into_iter().collect(),
                vec![format!("export type {name} = {};", resolved.expr)],
            )
        }
    };

    render_model(imports, declaration_lines)
}

/// Emit `models/index.ts` re-exporting every schema in document order.
pub fn emit_index(doc: &Document) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("index.ts.j2", include_str!("../../templates/index.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("index.ts.j2").unwrap();

    let names: Vec<&String> = doc.schemas.keys().collect();
    tmpl.render(context! { names => names })
        .expect("render should succeed")
}

fn interface_declaration(
    name: &str,
    bases: &[String],
    inline: &InlineObject,
) -> (Vec<String>, Vec<String>) {
    let mut imports = IndexSet::new();
    for base in bases {
        if base != name {
            imports.insert(base.clone());
        }
    }

    let mut lines = Vec::with_capacity(inline.properties.len() + 2);
    if bases.is_empty() {
        lines.push(format!("export interface {name} {{"));
    } else {
        lines.push(format!(
            "export interface {name} extends {} {{",
            bases.join(", ")
        ));
    }

    for (prop, prop_node) in &inline.properties {
        let resolved = resolve(prop_node, name);
        imports.extend(resolved.refs);
        let marker = if inline.required.contains(prop) { "" } else { "?" };
        lines.push(format!("  {prop}{marker}: {};", resolved.expr));
    }
    lines.push("}".to_string());

    (imports.into_iter().collect(), lines)
}

fn render_model(imports: Vec<String>, declaration_lines: Vec<String>) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("model.ts.j2", include_str!("../../templates/model.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("model.ts.j2").unwrap();

    tmpl.render(context! {
        imports => imports,
        declaration_lines => declaration_lines,
    })
    .expect("render should succeed")
}
