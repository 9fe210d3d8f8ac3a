//! Command surface for the externs generator.
//!
//! The pipeline is: load the declaration surface, walk it, then hand the
//! accumulated text to the filesystem in a single write and mirror it to
//! stdout. No I/O happens inside the walk.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::emit::ExternWriter;
use crate::error::ExternResult;
use crate::model::load;
use crate::walker::Walker;

/// Extension given to derived output paths.
const OUTPUT_EXTENSION: &str = "externs";

/// Install the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Extracts minifier-safe extern name lists from typed declaration surfaces.
#[derive(Debug, Parser)]
#[command(name = "externgen", bin_name = "externgen")]
pub struct Cli {
    /// Declaration surface to read (JSON).
    pub input: Option<PathBuf>,

    /// Output path; derived from the input when omitted.
    pub output: Option<PathBuf>,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No input path was given; the usage text was printed, no traversal ran.
    Usage,
    /// The extern list was written to the given path.
    Generated(PathBuf),
}

/// Run the generator for the given arguments.
pub fn run(cli: Cli) -> ExternResult<RunOutcome> {
    let Some(input) = cli.input else {
        print_usage();
        return Ok(RunOutcome::Usage);
    };
    let output = cli.output.unwrap_or_else(|| derive_output_path(&input));

    info!(input = %input.display(), output = %output.display(), "generating externs");
    println!("generating {} from {}", output.display(), input.display());

    let graph = load::load_file(&input)?;
    let mut writer = ExternWriter::new();
    Walker::new(&graph).run(graph.roots(), &mut writer);

    // Single write: a run that failed above leaves no truncated artifact.
    std::fs::write(&output, writer.text())?;
    print!("{}", writer.text());

    Ok(RunOutcome::Generated(output))
}

fn print_usage() {
    println!("Usage: externgen [file ...]");
    println!("Example: externgen a.decls.json a.externs");
}

/// Derive the output path from the input path by replacing its extension
/// with `.externs` (appending when there is none).
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}
