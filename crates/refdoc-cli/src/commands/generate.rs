//! Generate command implementation.
//!
//! This command:
//! 1. Loads the symbol manifest and the configuration
//! 2. Writes one page per documented public symbol
//! 3. Writes `index.md` and prints a summary of the run

use super::common::{ConfigOverrides, prepare};
use crate::cli::SourceArgs;
use anyhow::{Context, Result};
use refdoc_codegen::{GenerationReport, build_index};
use refdoc_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// One page in the summary.
#[derive(Debug, Serialize)]
struct PageSummary {
    /// Symbol name
    name: String,
    /// File written
    file: String,
}

/// Result of a generation run.
#[derive(Debug, Serialize)]
struct GenerationResult {
    /// Label of the symbol source
    source: String,
    /// Output directory
    output_dir: String,
    /// Index page written
    index: String,
    /// Number of pages written
    page_count: usize,
    /// Pages in index order
    pages: Vec<PageSummary>,
    /// Symbols skipped for lack of documentation
    undocumented: Vec<String>,
    /// Number of symbols excluded from the catalog
    excluded: usize,
}

impl From<&GenerationReport> for GenerationResult {
    fn from(report: &GenerationReport) -> Self {
        Self {
            source: report.source.clone(),
            output_dir: report.output_dir.display().to_string(),
            index: report.index_path.display().to_string(),
            page_count: report.page_count(),
            pages: report
                .pages
                .iter()
                .map(|p| PageSummary {
                    name: p.name.to_string(),
                    file: p.file_name.clone(),
                })
                .collect(),
            undocumented: report.undocumented.iter().map(ToString::to_string).collect(),
            excluded: report.excluded.len(),
        }
    }
}

/// Runs the generate command.
///
/// # Arguments
///
/// * `source` - Manifest, configuration file, priority and skip overrides
/// * `output_dir` - Output directory override
/// * `fail_on_missing` - Abort on the first undocumented symbol
/// * `no_atomic` - Write files in place
/// * `output_format` - Output format (json, text, pretty)
///
/// # Errors
///
/// Returns an error if:
/// - The manifest or configuration cannot be loaded
/// - A symbol is undocumented and `fail_on_missing` is set
/// - A page or the index cannot be written
pub fn run(
    source: &SourceArgs,
    output_dir: Option<PathBuf>,
    fail_on_missing: bool,
    no_atomic: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let overrides = ConfigOverrides {
        output_dir,
        fail_on_missing,
        no_atomic,
        ..ConfigOverrides::from_source(source)
    };
    let (registry, config) = prepare(source, overrides)?;

    info!(
        "Generating {} symbols into {}",
        registry.len(),
        config.output_dir.display()
    );

    let report = build_index(&registry, &config).with_context(|| {
        format!(
            "failed to generate reference into {}",
            config.output_dir.display()
        )
    })?;

    let result = GenerationResult::from(&report);
    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    info!(
        "Successfully generated {} pages ({} undocumented)",
        result.page_count,
        result.undocumented.len()
    );

    Ok(ExitCode::SUCCESS)
}
