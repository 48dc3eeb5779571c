//! JSON symbol manifests.
//!
//! A manifest is the file form of a [`Registry`], used when the symbols come
//! from outside the calling program:
//!
//! ```json
//! {
//!   "symbols": [
//!     { "name": "ora", "doc": "# ORA\nOver-representation analysis" },
//!     { "name": "meta_ora" },
//!     { "name": "webgestaltpy", "doc": "module", "visibility": "internal" }
//!   ]
//! }
//! ```
//!
//! `doc` may be omitted or `null` (undocumented). `visibility` may be omitted,
//! in which case reserved names default to internal.

use crate::registry::{Registry, SymbolEntry};
use refdoc_core::{Error, Result, Visibility};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parsed manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Label of the symbol source; defaults to the manifest path when
    /// loaded from disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Symbols in enumeration order.
    pub symbols: Vec<ManifestEntry>,
}

/// One symbol in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Symbol name
    pub name: String,
    /// Documentation text
    #[serde(default)]
    pub doc: Option<String>,
    /// Explicit visibility marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the JSON is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_catalog::Manifest;
    ///
    /// let manifest = Manifest::from_json_str(r#"{"symbols": [{"name": "nta"}]}"#).unwrap();
    /// assert_eq!(manifest.symbols.len(), 1);
    /// assert!(manifest.symbols[0].doc.is_none());
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::SerializationError {
            message: format!("invalid symbol manifest: {e}"),
            source: Some(e),
        })
    }

    /// Converts the manifest into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] for an empty symbol name and
    /// [`Error::DuplicateSymbol`] for a name listed twice.
    pub fn into_registry(self, default_label: &str) -> Result<Registry> {
        let label = self.label.unwrap_or_else(|| default_label.to_string());
        let mut builder = Registry::builder(label);

        for (position, entry) in self.symbols.into_iter().enumerate() {
            if entry.name.is_empty() {
                return Err(Error::ValidationError {
                    field: format!("symbols[{position}].name"),
                    reason: "symbol name cannot be empty".to_string(),
                });
            }

            let mut symbol = SymbolEntry::new(entry.name, entry.doc);
            if let Some(visibility) = entry.visibility {
                symbol = symbol.with_visibility(visibility);
            }
            builder = builder.entry(symbol);
        }

        builder.build()
    }
}

impl Registry {
    /// Loads a registry from a JSON manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be read, and
    /// the errors of [`Manifest::from_json_str`] and
    /// [`Manifest::into_registry`] otherwise.
    pub fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::SourceUnavailable {
            source_name: path.display().to_string(),
            source: Box::new(e),
        })?;

        let registry = Manifest::from_json_str(&content)?.into_registry(&path.display().to_string())?;
        tracing::info!(
            "Loaded {} symbols from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }
}
