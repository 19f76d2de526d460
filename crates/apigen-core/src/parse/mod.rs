pub mod operation;
pub mod parameter;
pub mod schema;
pub mod server;
pub mod spec;

use crate::error::ParseError;
use spec::OpenApiDocument;

/// Parse an OpenAPI spec from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let spec: OpenApiDocument = serde_yaml_ng::from_str(input)?;
    Ok(spec)
}
