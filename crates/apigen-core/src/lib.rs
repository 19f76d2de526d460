pub mod config;
pub mod emitters;
pub mod error;
pub mod generator;
pub mod host;
pub mod ir;
pub mod naming;
pub mod operations;
pub mod parse;
pub mod pipeline;
pub mod resolve;
pub mod transform;

/// A generated file with path and content.
///
/// Paths are relative to the owning document's `generated/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
