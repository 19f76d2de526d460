pub mod document;
pub mod schema_node;

pub use document::{Document, HttpMethod, OperationModel, ParamLocation, ParameterModel, PathOperation};
pub use schema_node::{InlineObject, SchemaNode};
