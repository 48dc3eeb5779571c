//! Common utilities shared across CLI commands.
//!
//! Loads the symbol manifest and the generator configuration, then applies
//! command-line overrides on top of the configuration file.

use crate::cli::SourceArgs;
use anyhow::{Context, Result};
use refdoc_catalog::Registry;
use refdoc_core::{GeneratorConfig, MissingDocPolicy};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces the configured output directory
    pub output_dir: Option<PathBuf>,
    /// Replaces the configured priority list when non-empty
    pub priority: Vec<String>,
    /// Added to the configured skip set
    pub skip: Vec<String>,
    /// Forces the `fail` missing-documentation policy
    pub fail_on_missing: bool,
    /// Disables atomic writes
    pub no_atomic: bool,
}

impl ConfigOverrides {
    /// Overrides carried by the shared source arguments.
    #[must_use]
    pub fn from_source(source: &SourceArgs) -> Self {
        Self {
            priority: source.priority.clone(),
            skip: source.skip.clone(),
            ..Self::default()
        }
    }
}

/// Loads the configuration file, or the defaults when none is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        debug!("No configuration file, using defaults");
        return Ok(GeneratorConfig::default());
    };

    GeneratorConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Applies command-line overrides to a loaded configuration.
///
/// # Examples
///
/// ```
/// use refdoc_cli::commands::common::{ConfigOverrides, apply_overrides};
/// use refdoc_core::{GeneratorConfig, MissingDocPolicy};
///
/// let config = GeneratorConfig::new().with_priority(["ora"]).with_skip(["a"]);
/// let overrides = ConfigOverrides {
///     priority: vec!["gsea".to_string()],
///     skip: vec!["b".to_string()],
///     fail_on_missing: true,
///     ..ConfigOverrides::default()
/// };
///
/// let config = apply_overrides(config, overrides);
/// assert_eq!(config.priority, vec!["gsea"]);
/// assert!(config.skip.contains("a") && config.skip.contains("b"));
/// assert_eq!(config.missing_docs, MissingDocPolicy::Fail);
/// ```
#[must_use]
pub fn apply_overrides(mut config: GeneratorConfig, overrides: ConfigOverrides) -> GeneratorConfig {
    if let Some(dir) = overrides.output_dir {
        config = config.with_output_dir(dir);
    }
    if !overrides.priority.is_empty() {
        config.priority = overrides.priority;
    }
    config = config.with_skip(overrides.skip);
    if overrides.fail_on_missing {
        config = config.with_missing_docs(MissingDocPolicy::Fail);
    }
    if overrides.no_atomic {
        config = config.with_atomic_writes(false);
    }
    config
}

/// Loads the manifest and the effective configuration for a command.
///
/// # Errors
///
/// Returns an error if the manifest or the configuration file cannot be
/// loaded. Manifest errors keep their [`refdoc_core::Error`] in the chain so
/// the exit code can reflect them.
pub fn prepare(source: &SourceArgs, overrides: ConfigOverrides) -> Result<(Registry, GeneratorConfig)> {
    let config = apply_overrides(load_config(source.config.as_deref())?, overrides);
    let registry = Registry::from_manifest_path(&source.manifest)
        .with_context(|| format!("failed to load manifest {}", source.manifest.display()))?;
    Ok((registry, config))
}
