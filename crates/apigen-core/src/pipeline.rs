use std::path::Path;

use crate::config::{self, GeneratorOptions};
use crate::error::{DocumentError, PipelineError};
use crate::generator;
use crate::host::{FileHost, Reporter};
use crate::parse;
use crate::transform;

/// Counters for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub failures: usize,
    pub files_written: usize,
}

/// Drives generation across every spec document under a root directory.
/// Each document writes into its own `generated/` subtree, so documents
/// never contend for output paths.
pub struct Pipeline<'a, F: FileHost, R: Reporter> {
    host: &'a F,
    reporter: &'a R,
}

impl<'a, F: FileHost, R: Reporter> Pipeline<'a, F, R> {
    pub fn new(host: &'a F, reporter: &'a R) -> Self {
        Self { host, reporter }
    }

    /// Process every discovered document. Only a scan failure is fatal;
    /// a document that fails to read, parse, or write is reported and
    /// skipped while the remaining documents still generate.
    pub fn run(&self, options: &GeneratorOptions) -> Result<RunSummary, PipelineError> {
        let files = self
            .host
            .list_files(&options.root)
            .map_err(|source| PipelineError::Scan {
                root: options.root.display().to_string(),
                source,
            })?;

        let mut summary = RunSummary::default();
        for path in files.iter().filter(|p| config::is_spec_file(p)) {
            match self.process_document(path) {
                Ok(written) => {
                    summary.documents += 1;
                    summary.files_written += written;
                    self.reporter
                        .info(&format!("generated {} files for {}", written, path.display()));
                }
                Err(err) => {
                    summary.failures += 1;
                    self.reporter.error(&format!("{}: {err}", path.display()));
                }
            }
        }
        Ok(summary)
    }

    fn process_document(&self, path: &Path) -> Result<usize, DocumentError> {
        let text = self.host.read_to_string(path).map_err(DocumentError::Read)?;
        let spec = parse::from_yaml(&text)?;

        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let transformed = transform::build_document(&base_name, &spec);
        for warning in &transformed.warnings {
            self.reporter
                .warning(&format!("{}: {warning}", path.display()));
        }
        let files = generator::generate_document(&transformed.document);

        let out_root = path.parent().unwrap_or_else(|| Path::new("")).join("generated");
        for file in &files {
            let target = out_root.join(&file.path);
            if let Some(parent) = target.parent() {
                self.host
                    .create_dir_all(parent)
                    .map_err(|source| DocumentError::Write {
                        path: parent.display().to_string(),
                        source,
                    })?;
            }
            self.host
                .write(&target, &file.content)
                .map_err(|source| DocumentError::Write {
                    path: target.display().to_string(),
                    source,
                })?;
        }
        Ok(files.len())
    }
}
