pub mod classify;

use crate::ir::{
    Document, HttpMethod, OperationModel, ParamLocation, ParameterModel, PathOperation,
};
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::ParameterLocation;
use crate::parse::spec::OpenApiDocument;

use classify::classify;

/// Result of transforming one parsed spec: the emission-ready document plus
/// one message per schema degradation encountered along the way.
#[derive(Debug, Clone)]
pub struct Transformed {
    pub document: Document,
    pub warnings: Vec<String>,
}

/// Build the in-memory document model from a parsed spec. Pure; iteration
/// order everywhere is document declaration order. Degraded schemas land in
/// `warnings`, attributed to the named schema that owns them.
pub fn build_document(base_name: &str, spec: &OpenApiDocument) -> Transformed {
    let servers = spec.servers.iter().map(|s| s.url.clone()).collect();

    let mut operations = Vec::new();
    for (template, item) in &spec.paths {
        collect_operations(template, item, &mut operations);
    }

    let mut warnings = Vec::new();
    let mut schemas = indexmap::IndexMap::new();
    if let Some(components) = &spec.components {
        for (name, schema) in &components.schemas {
            let mut schema_warnings = Vec::new();
            let node = classify(schema, &mut schema_warnings);
            warnings.extend(
                schema_warnings
                    .into_iter()
                    .map(|w| format!("schema `{name}`: {w}")),
            );
            schemas.insert(name.clone(), node);
        }
    }

    Transformed {
        document: Document {
            base_name: base_name.to_string(),
            servers,
            operations,
            schemas,
        },
        warnings,
    }
}

fn collect_operations(template: &str, item: &PathItem, out: &mut Vec<PathOperation>) {
    let by_method = [
        (HttpMethod::Get, &item.get),
        (HttpMethod::Post, &item.post),
        (HttpMethod::Put, &item.put),
        (HttpMethod::Delete, &item.delete),
        (HttpMethod::Patch, &item.patch),
    ];

    for (method, op) in by_method {
        if let Some(op) = op {
            out.push(PathOperation {
                template: template.to_string(),
                method,
                operation: build_operation(op),
            });
        }
    }
}

fn build_operation(op: &Operation) -> OperationModel {
    let parameters = op
        .parameters
        .iter()
        .map(|p| ParameterModel {
            name: p.name.clone(),
            location: match p.location {
                ParameterLocation::Path => ParamLocation::Path,
                ParameterLocation::Query => ParamLocation::Query,
                ParameterLocation::Header => ParamLocation::Header,
                ParameterLocation::Cookie => ParamLocation::Cookie,
            },
            required: p.required,
        })
        .collect();

    OperationModel {
        id: op.operation_id.clone(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        parameters,
    }
}
