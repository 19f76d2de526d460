use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use apigen_core::config::GeneratorOptions;
use apigen_core::host::{LogReporter, OsFileHost};
use apigen_core::ir::SchemaNode;
use apigen_core::pipeline::Pipeline;
use apigen_core::{parse, transform};

#[derive(Parser)]
#[command(name = "apigen", version, about = "Generate TypeScript models and URL clients from OpenAPI documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory tree and generate code next to every spec file
    Generate {
        /// Root directory to scan for .yml/.yaml documents
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Parse a single document and report what it contains
    Validate {
        /// Path to an OpenAPI document
        input: PathBuf,
    },
    /// Print a structural summary of a single document
    Inspect {
        /// Path to an OpenAPI document
        input: PathBuf,
        /// Output format for the summary
        #[arg(long, value_enum, default_value = "yaml")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { root } => cmd_generate(root),
        Commands::Validate { input } => cmd_validate(input),
        Commands::Inspect { input, format } => cmd_inspect(input, format),
    }
}

fn cmd_generate(root: PathBuf) -> Result<()> {
    let host = OsFileHost;
    let reporter = LogReporter;
    let pipeline = Pipeline::new(&host, &reporter);

    let summary = pipeline
        .run(&GeneratorOptions::new(root))
        .context("generation failed")?;

    // Per-document failures are already reported; they do not fail the run.
    eprintln!(
        "{} documents, {} files written, {} failures",
        summary.documents, summary.files_written, summary.failures
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let spec = parse::from_yaml(&text)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let title = spec
        .info
        .as_ref()
        .map(|info| info.title.as_str())
        .unwrap_or("(untitled)");
    let schemas = spec
        .components
        .as_ref()
        .map(|c| c.schemas.len())
        .unwrap_or(0);

    println!("{title}: {} paths, {schemas} schemas", spec.paths.len());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: Format) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let spec = parse::from_yaml(&text)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let base_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let transformed = transform::build_document(&base_name, &spec);
    for warning in &transformed.warnings {
        eprintln!("warning: {warning}");
    }
    let document = transformed.document;

    let schemas: serde_json::Map<String, serde_json::Value> = document
        .schemas
        .iter()
        .map(|(name, node)| (name.clone(), schema_kind(node).into()))
        .collect();
    let operations: Vec<serde_json::Value> = document
        .operations
        .iter()
        .map(|op| {
            serde_json::json!(format!("{} {}", op.method.as_upper(), op.template))
        })
        .collect();

    let summary = serde_json::json!({
        "baseName": document.base_name,
        "servers": document.servers,
        "operations": operations,
        "schemas": schemas,
    });

    match format {
        Format::Yaml => print!("{}", serde_yaml_ng::to_string(&summary)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn schema_kind(node: &SchemaNode) -> &'static str {
    match node {
        SchemaNode::Primitive { .. } => "primitive",
        SchemaNode::ArrayOf(_) => "array",
        SchemaNode::ObjectInline(_) => "object",
        SchemaNode::Ref(_) => "ref",
        SchemaNode::EnumOf(_) => "enum",
        SchemaNode::Composite { .. } => "composite",
    }
}
