//! Command execution and runtime logic.
//!
//! Contains command dispatch, logging initialization and the mapping from
//! errors to process exit codes.

use anyhow::Result;
use refdoc_core::Error;
use refdoc_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;

/// Initializes logging infrastructure.
///
/// `--verbose` forces the debug level; otherwise `RUST_LOG` is honoured,
/// falling back to info. Logs go to stderr so command output on stdout
/// stays machine-readable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            source,
            output_dir,
            fail_on_missing,
            no_atomic,
        } => commands::generate::run(
            &source,
            output_dir,
            fail_on_missing,
            no_atomic,
            output_format,
        ),
        Commands::List { source } => commands::list::run(&source, output_format),
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}

/// Picks the exit code for a failed command.
///
/// The first [`refdoc_core::Error`] in the chain decides via
/// [`ExitCode::for_error`]; errors from outside refdoc map to
/// [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use refdoc_cli::runner::exit_code_for;
/// use refdoc_core::Error;
/// use refdoc_core::cli::ExitCode;
///
/// let err = anyhow::Error::new(Error::ConfigError {
///     message: "bad toml".to_string(),
/// });
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
/// ```
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
