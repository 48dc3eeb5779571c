//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// refdoc - Markdown reference pages from symbol documentation.
///
/// Reads a symbol manifest, writes one Markdown page per documented public
/// symbol and an `index.md` linking to them.
#[derive(Parser, Debug)]
#[command(name = "refdoc")]
#[command(version, about, long_about = None)]
#[command(author = "Refdoc Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Symbol source and configuration shared by every command that reads a
/// manifest.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON symbol manifest
    pub manifest: PathBuf,

    /// TOML configuration file
    #[arg(short, long, env = "REFDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Priority symbol, listed first in the index (repeatable; replaces the
    /// configured list)
    #[arg(short, long = "priority", num_args = 1)]
    pub priority: Vec<String>,

    /// Symbol to leave out (repeatable; added to the configured skip set)
    #[arg(short, long = "skip", num_args = 1)]
    pub skip: Vec<String>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate reference pages and the index.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Defaults: pages go to docs/reference
    /// refdoc generate symbols.json
    ///
    /// # Custom output, priority symbols first
    /// refdoc generate symbols.json -o site/ref -p ora -p gsea
    ///
    /// # Abort on the first undocumented symbol
    /// refdoc generate symbols.json --fail-on-missing
    /// ```
    Generate {
        /// Manifest, configuration, priority and skip list
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (overrides the configuration file)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fail on a symbol without documentation instead of skipping it
        #[arg(long)]
        fail_on_missing: bool,

        /// Write files in place instead of via a temporary file
        #[arg(long)]
        no_atomic: bool,
    },

    /// List the symbols a generation would emit, in index order.
    ///
    /// Nothing is written.
    List {
        /// Manifest, configuration, priority and skip list
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdoc_core::cli::OutputFormat;

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from(["refdoc", "generate", "symbols.json"]);
        if let Commands::Generate {
            source,
            output_dir,
            fail_on_missing,
            no_atomic,
        } = cli.command
        {
            assert_eq!(source.manifest, PathBuf::from("symbols.json"));
            assert!(source.config.is_none());
            assert!(source.priority.is_empty());
            assert!(output_dir.is_none());
            assert!(!fail_on_missing);
            assert!(!no_atomic);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_generate_with_overrides() {
        let cli = Cli::parse_from([
            "refdoc",
            "generate",
            "symbols.json",
            "--output-dir",
            "/tmp/ref",
            "-p",
            "gsea",
            "--priority",
            "ora",
            "--skip",
            "webgestaltpy",
            "--fail-on-missing",
        ]);
        if let Commands::Generate {
            source,
            output_dir,
            fail_on_missing,
            ..
        } = cli.command
        {
            assert_eq!(output_dir, Some(PathBuf::from("/tmp/ref")));
            assert_eq!(source.priority, vec!["gsea", "ora"]);
            assert_eq!(source.skip, vec!["webgestaltpy"]);
            assert!(fail_on_missing);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::parse_from(["refdoc", "list", "symbols.json", "-c", "refdoc.toml"]);
        if let Commands::List { source } = cli.command {
            assert_eq!(source.config, Some(PathBuf::from("refdoc.toml")));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_manifest_required() {
        assert!(Cli::try_parse_from(["refdoc", "generate"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["refdoc", "--verbose", "list", "symbols.json"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["refdoc", "list", "symbols.json"]);
        assert_eq!(cli.format, "pretty");
        assert_eq!(cli.format.parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_output_format_after_subcommand() {
        let cli = Cli::parse_from(["refdoc", "generate", "symbols.json", "--format", "json"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["refdoc", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
