use std::path::{Path, PathBuf};

/// File extensions recognized as OpenAPI spec documents during the scan.
pub const SPEC_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Options consumed by the generation pipeline.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Root directory scanned recursively for spec documents.
    pub root: PathBuf,
}

impl GeneratorOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Whether a path looks like a spec document the scanner should pick up.
pub fn is_spec_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SPEC_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_spec_extensions() {
        assert!(is_spec_file(Path::new("api/petstore.yaml")));
        assert!(is_spec_file(Path::new("api/petstore.yml")));
        assert!(!is_spec_file(Path::new("api/petstore.json")));
        assert!(!is_spec_file(Path::new("api/petstore")));
    }
}
