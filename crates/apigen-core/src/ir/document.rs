use indexmap::IndexMap;

use super::schema_node::SchemaNode;

/// HTTP methods that participate in client generation. Any other method key
/// on a path item is ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// All core methods, in the fixed order operations are emitted per path.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Lowercase keyword, used verbatim as the generated method-name prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// One parsed document, ready for emission. Constructed fresh per run and
/// discarded after its files are written.
#[derive(Debug, Clone)]
pub struct Document {
    /// Spec file stem; the client class is named `{pascal(base_name)}Client`.
    pub base_name: String,
    /// Server URLs in declaration order; the first one seeds the client's
    /// default base URL.
    pub servers: Vec<String>,
    /// Path/method pairs in document order, methods in `HttpMethod::ALL`
    /// order within each path.
    pub operations: Vec<PathOperation>,
    /// Named schemas in declaration order.
    pub schemas: IndexMap<String, SchemaNode>,
}

/// One path/method pair.
#[derive(Debug, Clone)]
pub struct PathOperation {
    pub template: String,
    pub method: HttpMethod,
    pub operation: OperationModel,
}

#[derive(Debug, Clone, Default)]
pub struct OperationModel {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<ParameterModel>,
}

#[derive(Debug, Clone)]
pub struct ParameterModel {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
}
