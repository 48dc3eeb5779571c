//! refdoc CLI.
//!
//! Generates Markdown reference pages from a symbol manifest.
//!
//! # Examples
//!
//! ```bash
//! # Write pages and index.md into docs/reference
//! refdoc generate symbols.json
//!
//! # Show what would be generated, as JSON
//! refdoc --format json list symbols.json --skip webgestaltpy
//! ```

use anyhow::Result;
use clap::Parser;
use refdoc_cli::cli::Cli;
use refdoc_cli::runner::{execute_command, exit_code_for, init_logging};
use refdoc_core::cli::{ExitCode, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = match execute_command(cli.command, output_format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    if exit_code == ExitCode::SUCCESS {
        return Ok(());
    }
    std::process::exit(exit_code.as_i32());
}
