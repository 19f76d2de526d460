use minijinja::{Environment, context};

use crate::ir::Document;
use crate::naming;
use crate::operations::{ClientMethod, analyze_operations};

/// Emit `client.ts` — the URL-builder client class. Methods construct
/// request URLs only; issuing the HTTP call is out of scope by design.
pub fn emit_client(doc: &Document) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("client.ts.j2", include_str!("../../templates/client.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("client.ts.j2").unwrap();

    let class_name = format!("{}Client", naming::pascal(&doc.base_name));
    let default_base_url = doc
        .servers
        .first()
        .map(|url| url.strip_suffix('/').unwrap_or(url).to_string())
        .unwrap_or_default();

    let operations: Vec<minijinja::Value> = analyze_operations(doc)
        .iter()
        .map(method_context)
        .collect();

    tmpl.render(context! {
        class_name => class_name,
        default_base_url => default_base_url,
        operations => operations,
    })
    .expect("render should succeed")
}

fn method_context(method: &ClientMethod) -> minijinja::Value {
    context! {
        name => method.name.clone(),
        signature => build_signature(method),
        doc_lines => build_doc_lines(method),
        body_lines => build_body_lines(method),
    }
}

fn build_signature(method: &ClientMethod) -> String {
    let mut parts: Vec<String> = method
        .path_params
        .iter()
        .map(|p| format!("{p}: string | number"))
        .collect();

    if !method.query_params.is_empty() {
        let keys: Vec<String> = method
            .query_params
            .iter()
            .map(|q| format!("{q}?: any"))
            .collect();
        parts.push(format!("query?: {{ {} }}", keys.join("; ")));
    }

    parts.join(", ")
}

fn build_doc_lines(method: &ClientMethod) -> Vec<String> {
    let summary = method
        .summary
        .clone()
        .unwrap_or_else(|| format!("{} {}", method.method.as_upper(), method.path_template));

    let mut lines = vec![jsdoc_safe(&summary)];
    if let Some(description) = &method.description {
        lines.push(jsdoc_safe(description));
    }
    for param in &method.path_params {
        lines.push(format!("@param {param}"));
    }
    if !method.query_params.is_empty() {
        lines.push("@param query Optional query parameters".to_string());
    }
    lines
}

fn build_body_lines(method: &ClientMethod) -> Vec<String> {
    let mut lines = vec![format!(
        "let url = this._baseUrl + \"{}\";",
        method.path_template
    )];

    for param in &method.path_params {
        lines.push(format!(
            "url = url.replace(\"{{{param}}}\", String({param}));"
        ));
    }

    if !method.query_params.is_empty() {
        // Iterate the object's own keys at call time, not the declared list,
        // and skip absent/null values.
        lines.extend(
            [
                "if (query) {",
                "  const parts: string[] = [];",
                "  for (const key of Object.keys(query)) {",
                "    const value = (query as Record<string, any>)[key];",
                "    if (value === undefined || value === null) {",
                "      continue;",
                "    }",
                "    parts.push(encodeURIComponent(key) + \"=\" + encodeURIComponent(String(value)));",
                "  }",
                "  if (parts.length > 0) {",
                "    url += \"?\" + parts.join(\"&\");",
                "  }",
                "}",
            ]
            .map(String::from),
        );
    }

    lines.push("return url;".to_string());
    lines
}

/// Escape `*/` sequences and newlines that would break JSDoc comment blocks.
fn jsdoc_safe(value: &str) -> String {
    value.replace("*/", "*\\/").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{HttpMethod, OperationModel, ParamLocation, ParameterModel, PathOperation};
    use indexmap::IndexMap;

    fn doc(operations: Vec<PathOperation>, servers: Vec<String>) -> Document {
        Document {
            base_name: "petstore".to_string(),
            servers,
            operations,
            schemas: IndexMap::new(),
        }
    }

    fn entry(template: &str, method: HttpMethod, operation: OperationModel) -> PathOperation {
        PathOperation {
            template: template.to_string(),
            method,
            operation,
        }
    }

    #[test]
    fn class_name_from_document_base_name() {
        let content = emit_client(&doc(vec![], vec![]));
        assert!(content.starts_with("export class PetstoreClient {"));
    }

    #[test]
    fn default_base_url_strips_trailing_slash() {
        let content = emit_client(&doc(
            vec![],
            vec!["https://api.example.com/v1/".to_string()],
        ));
        assert!(content.contains("(baseUrl ?? \"https://api.example.com/v1\").replace(/\\/$/, \"\")"));
    }

    #[test]
    fn missing_servers_default_to_empty_base_url() {
        let content = emit_client(&doc(vec![], vec![]));
        assert!(content.contains("(baseUrl ?? \"\").replace(/\\/$/, \"\")"));
    }

    #[test]
    fn path_params_replaced_in_declaration_order() {
        let content = emit_client(&doc(
            vec![entry(
                "/a/{y}/{x}/{y}",
                HttpMethod::Get,
                OperationModel::default(),
            )],
            vec![],
        ));
        assert!(content.contains("getAByByBy(y: string | number, x: string | number): string"));
        let y = content.find("url = url.replace(\"{y}\", String(y));").unwrap();
        let x = content.find("url = url.replace(\"{x}\", String(x));").unwrap();
        assert!(y < x);
    }

    #[test]
    fn query_object_appended_conditionally() {
        let op = OperationModel {
            summary: Some("List pets".to_string()),
            parameters: vec![ParameterModel {
                name: "limit".to_string(),
                location: ParamLocation::Query,
                required: false,
            }],
            ..Default::default()
        };
        let content = emit_client(&doc(vec![entry("/pets", HttpMethod::Get, op)], vec![]));
        assert!(content.contains("getPets(query?: { limit?: any }): string"));
        assert!(content.contains("for (const key of Object.keys(query))"));
        assert!(content.contains("url += \"?\" + parts.join(\"&\");"));
        assert!(content.contains("* @param query Optional query parameters"));
    }

    #[test]
    fn jsdoc_falls_back_to_method_and_template() {
        let content = emit_client(&doc(
            vec![entry("/pets/{petId}", HttpMethod::Delete, OperationModel::default())],
            vec![],
        ));
        assert!(content.contains("* DELETE /pets/{petId}"));
        assert!(content.contains("* @param petId"));
    }

    #[test]
    fn method_without_query_has_plain_body() {
        let content = emit_client(&doc(
            vec![entry("/pets", HttpMethod::Post, OperationModel::default())],
            vec![],
        ));
        assert!(content.contains("postPets(): string {\n    let url = this._baseUrl + \"/pets\";\n    return url;\n  }"));
    }
}
