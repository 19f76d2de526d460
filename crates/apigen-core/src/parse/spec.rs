use indexmap::IndexMap;
use serde::Deserialize;

use super::operation::PathItem;
use super::schema::SchemaOrRef;
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(default)]
    pub version: Option<String>,
}

/// Components object. Only `schemas` participates in generation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}

/// Top-level OpenAPI 3.x document, reduced to the subset generation consumes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub info: Option<Info>,

    #[serde(default)]
    pub servers: Vec<Server>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Option<Components>,
}
