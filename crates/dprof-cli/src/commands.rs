//! Command implementations for the `dprof` binary.

use std::fs;
use std::path::Path;

use anyhow::Context;

use dprof_core::profile_bytes;
use dprof_ingest::AdapterRegistry;
use dprof_model::{AnalysisResult, ProfileOptions};

use crate::cli::AnalyzeArgs;

/// Read the input file, select an adapter, and profile it.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<AnalysisResult> {
    let input = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |n| n.to_string_lossy().into_owned());

    let options = ProfileOptions {
        detect_patterns: args.patterns,
        check_uniqueness: args.unique,
        sample_size: args.sample,
        encoding: args.encoding.clone(),
        delimiter: args.delimiter,
        fixed_widths: args.fixed_widths.clone(),
        detect_delimiter: args.detect_delimiter,
        file_name: Some(file_name.clone()),
    };

    let registry = AdapterRegistry::new();
    let result = profile_bytes(&registry, &file_name, &input, &options)?;
    tracing::info!(
        file = %file_name,
        records = result.total_records,
        fields = result.fields.len(),
        "analysis complete"
    );
    Ok(result)
}

/// Write the JSON profile to the given path, or stdout when absent.
pub fn write_output(result: &AnalysisResult, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Analysis saved to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// List supported source formats and their extensions.
pub fn run_formats() {
    let registry = AdapterRegistry::new();
    for (format, extensions) in registry.supported_extensions() {
        println!("{:<8} {}", format.tag(), extensions.join(", "));
    }
}
