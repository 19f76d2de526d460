use crate::GeneratedFile;
use crate::emitters::{client, models};
use crate::ir::Document;

/// Name of the client file, emitted directly under `generated/`.
pub const CLIENT_FILE: &str = "client.ts";

/// Produce the full artifact list for one document: one model file per
/// schema in declaration order, the model index, then the client.
///
/// Output is a pure function of the document; running it twice on the same
/// input yields byte-identical content.
pub fn generate_document(doc: &Document) -> Vec<GeneratedFile> {
    let mut files = Vec::with_capacity(doc.schemas.len() + 2);

    for (name, node) in &doc.schemas {
        files.push(GeneratedFile {
            path: format!("models/{name}.ts"),
            content: models::emit_model(name, node),
        });
    }

    files.push(GeneratedFile {
        path: "models/index.ts".to_string(),
        content: models::emit_index(doc),
    });

    files.push(GeneratedFile {
        path: CLIENT_FILE.to_string(),
        content: client::emit_client(doc),
    });

    files
}
