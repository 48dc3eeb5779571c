//! List command implementation.
//!
//! Prints the filtered catalog in index order without writing anything.

use super::common::{ConfigOverrides, prepare};
use crate::cli::SourceArgs;
use anyhow::{Context, Result};
use refdoc_catalog::{Exclusion, SymbolCatalog, SymbolSource};
use refdoc_codegen::{order_symbols, page_file_name};
use refdoc_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use tracing::info;

/// One catalog entry.
#[derive(Debug, Serialize)]
struct ListedSymbol {
    name: String,
    file: String,
    documented: bool,
}

/// Result of listing a catalog.
#[derive(Debug, Serialize)]
struct ListResult {
    source: String,
    symbols: Vec<ListedSymbol>,
    excluded: Vec<Exclusion>,
}

/// Runs the list command.
///
/// Undocumented symbols are listed with `documented: false`; they would be
/// skipped (or fail the run) on generation.
///
/// # Errors
///
/// Returns an error if the manifest or configuration cannot be loaded.
pub fn run(source: &SourceArgs, output_format: OutputFormat) -> Result<ExitCode> {
    let (registry, config) = prepare(source, ConfigOverrides::from_source(source))?;

    let scan = SymbolCatalog::new(&registry, &config.skip)
        .scan()
        .context("failed to list symbols")?;
    let ordered = order_symbols(&scan.symbols, &config.priority);

    let symbols = ordered
        .iter()
        .map(|name| {
            let documented = registry
                .documentation(name)
                .with_context(|| format!("failed to look up documentation for '{name}'"))?
                .is_some();
            Ok(ListedSymbol {
                name: name.to_string(),
                file: page_file_name(name.as_str()),
                documented,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "{} symbols in catalog, {} excluded",
        symbols.len(),
        scan.excluded.len()
    );

    let result = ListResult {
        source: registry.label().to_string(),
        symbols,
        excluded: scan.excluded,
    };

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
