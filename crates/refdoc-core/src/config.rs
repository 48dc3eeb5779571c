//! Generator configuration.
//!
//! All settings of a generation run travel in one [`GeneratorConfig`] value
//! that is handed to the index builder at call time. The value can be built
//! in code or read from a TOML file; every field has a default so a file only
//! needs to mention what it changes.
//!
//! # Examples
//!
//! ```
//! use refdoc_core::{GeneratorConfig, MissingDocPolicy};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//! output_dir = "site/reference"
//! priority = ["ora", "gsea"]
//! skip = ["webgestaltpy"]
//! "#).unwrap();
//!
//! assert_eq!(config.output_dir.to_str(), Some("site/reference"));
//! assert_eq!(config.priority, vec!["ora", "gsea"]);
//! assert!(config.skip.contains("webgestaltpy"));
//! assert_eq!(config.missing_docs, MissingDocPolicy::Skip);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory for generated pages.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/reference";

/// What to do with a symbol whose documentation is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDocPolicy {
    /// Write no page and no index entry for the symbol.
    #[default]
    Skip,
    /// Abort the run, naming the symbol.
    Fail,
}

impl fmt::Display for MissingDocPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Static text placed at the top of `index.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Level-1 heading of the index page.
    pub title: String,
    /// One-line description under the title.
    pub description: String,
    /// Level-2 heading above the link list.
    pub section: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            title: "Reference".to_string(),
            description: "API reference generated from the documentation of every public symbol."
                .to_string(),
            section: "Functions".to_string(),
        }
    }
}

/// Configuration of one generation run.
///
/// Defaults:
/// - `output_dir`: `docs/reference`
/// - `priority`: empty
/// - `skip`: empty
/// - `missing_docs`: `skip`
/// - `atomic_writes`: true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory that receives the pages and `index.md`.
    pub output_dir: PathBuf,

    /// Names emitted first, in this order, when present in the catalog.
    pub priority: Vec<String>,

    /// Names excluded from generation entirely.
    pub skip: BTreeSet<String>,

    /// Handling of symbols without documentation.
    pub missing_docs: MissingDocPolicy,

    /// Write through a temporary file and rename.
    pub atomic_writes: bool,

    /// Header text of the index page.
    pub index: IndexSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            priority: Vec::new(),
            skip: BTreeSet::new(),
            missing_docs: MissingDocPolicy::Skip,
            atomic_writes: true,
            index: IndexSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or holds
    /// fields of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse configuration: {e}"),
        })
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigError {
            message: format!("failed to serialize configuration: {e}"),
        })
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the priority list.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::new().with_priority(["nta", "ora"]);
    /// assert_eq!(config.priority, vec!["nta", "ora"]);
    /// ```
    #[must_use]
    pub fn with_priority<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds names to the skip set.
    #[must_use]
    pub fn with_skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the missing documentation policy.
    #[must_use]
    pub fn with_missing_docs(mut self, policy: MissingDocPolicy) -> Self {
        self.missing_docs = policy;
        self
    }

    /// Sets whether writes go through a temporary file.
    #[must_use]
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    /// Replaces the index header text.
    #[must_use]
    pub fn with_index(mut self, index: IndexSettings) -> Self {
        self.index = index;
        self
    }
}
