//! Operation analysis: path/query parameter extraction and deterministic
//! method naming for the client synthesizer.

use indexmap::IndexSet;

use crate::ir::{Document, HttpMethod, ParamLocation};
use crate::naming;

/// One generated client method, fully analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMethod {
    /// HTTP keyword + pascal-cased operation identifier. The keyword is kept
    /// even when the identifier already encodes the verb (`getGetUserById`);
    /// this doubling is a documented contract of the generator.
    pub name: String,
    pub method: HttpMethod,
    pub path_template: String,
    /// `{token}` names, first-occurrence order, duplicates folded once.
    pub path_params: Vec<String>,
    /// `in: query` parameter names, declaration order, duplicates kept.
    pub query_params: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// Analyze every path/method pair of a document, in document order.
pub fn analyze_operations(doc: &Document) -> Vec<ClientMethod> {
    doc.operations
        .iter()
        .map(|entry| {
            let op = &entry.operation;
            let id = op
                .id
                .clone()
                .unwrap_or_else(|| derive_operation_id(&entry.template));
            ClientMethod {
                name: format!("{}{}", entry.method.as_str(), naming::pascal(&id)),
                method: entry.method,
                path_template: entry.template.clone(),
                path_params: path_parameters(&entry.template),
                query_params: op
                    .parameters
                    .iter()
                    .filter(|p| p.location == ParamLocation::Query)
                    .map(|p| p.name.clone())
                    .collect(),
                summary: op.summary.clone(),
                description: op.description.clone(),
            }
        })
        .collect()
}

/// Every `{token}` occurrence in the template, left to right, folded at
/// first occurrence.
pub fn path_parameters(template: &str) -> Vec<String> {
    let mut seen = IndexSet::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        seen.insert(rest[start + 1..start + len].to_string());
        rest = &rest[start + len + 1..];
    }
    seen.into_iter().collect()
}

/// Derive an operation identifier from a path template when no operationId
/// is declared: every `{...}` segment becomes the literal `By`, then every
/// character that is not a letter or digit is stripped. Order-sensitive and
/// case-preserving.
pub fn derive_operation_id(template: &str) -> String {
    let mut replaced = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        replaced.push_str(&rest[..start]);
        match rest[start..].find('}') {
            Some(len) => {
                replaced.push_str("By");
                rest = &rest[start + len + 1..];
            }
            None => {
                // Unterminated token: keep the tail, stripping handles it.
                replaced.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    replaced.push_str(rest);
    replaced.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{OperationModel, ParameterModel, PathOperation};
    use indexmap::IndexMap;

    fn doc_with(template: &str, method: HttpMethod, operation: OperationModel) -> Document {
        Document {
            base_name: "api".to_string(),
            servers: vec![],
            operations: vec![PathOperation {
                template: template.to_string(),
                method,
                operation,
            }],
            schemas: IndexMap::new(),
        }
    }

    #[test]
    fn derives_by_identifier_for_tokenized_path() {
        assert_eq!(derive_operation_id("/users/{id}"), "usersBy");
        assert_eq!(derive_operation_id("/users"), "users");
        assert_eq!(derive_operation_id("/a/{y}/{x}/{y}"), "aByByBy");
        assert_eq!(derive_operation_id("/v1/pet-store/{id}"), "v1petstoreBy");
    }

    #[test]
    fn method_name_prefixes_http_keyword() {
        let doc = doc_with("/users/{id}", HttpMethod::Get, OperationModel::default());
        let methods = analyze_operations(&doc);
        assert_eq!(methods[0].name, "getUsersBy");
    }

    #[test]
    fn method_name_without_path_params() {
        let doc = doc_with("/users", HttpMethod::Get, OperationModel::default());
        let methods = analyze_operations(&doc);
        assert_eq!(methods[0].name, "getUsers");
        assert!(methods[0].path_params.is_empty());
    }

    #[test]
    fn explicit_operation_id_used_verbatim_and_doubled() {
        let doc = doc_with(
            "/users/{id}",
            HttpMethod::Get,
            OperationModel {
                id: Some("getUserById".to_string()),
                ..Default::default()
            },
        );
        let methods = analyze_operations(&doc);
        assert_eq!(methods[0].name, "getGetUserById");
    }

    #[test]
    fn path_params_fold_duplicates_at_first_occurrence() {
        assert_eq!(path_parameters("/a/{y}/{x}/{y}"), vec!["y", "x"]);
    }

    #[test]
    fn query_params_keep_declaration_order_and_duplicates() {
        let params = ["limit", "offset", "limit"]
            .into_iter()
            .map(|name| ParameterModel {
                name: name.to_string(),
                location: ParamLocation::Query,
                required: false,
            })
            .collect();
        let doc = doc_with(
            "/users",
            HttpMethod::Get,
            OperationModel {
                parameters: params,
                ..Default::default()
            },
        );
        let methods = analyze_operations(&doc);
        assert_eq!(methods[0].query_params, vec!["limit", "offset", "limit"]);
    }

    #[test]
    fn header_and_cookie_params_do_not_affect_generation() {
        let parameters = vec![
            ParameterModel {
                name: "x-trace".to_string(),
                location: ParamLocation::Header,
                required: false,
            },
            ParameterModel {
                name: "session".to_string(),
                location: ParamLocation::Cookie,
                required: false,
            },
        ];
        let doc = doc_with(
            "/users",
            HttpMethod::Get,
            OperationModel {
                parameters,
                ..Default::default()
            },
        );
        let methods = analyze_operations(&doc);
        assert!(methods[0].query_params.is_empty());
    }
}
