use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// A failure while processing one discovered document. Never fatal for the
/// whole run; the pipeline reports it and moves on to the next document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read spec: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse spec: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A failure that aborts the whole invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to scan {root}: {source}")]
    Scan {
        root: String,
        #[source]
        source: std::io::Error,
    },
}
