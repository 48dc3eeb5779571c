//! Statically declared symbol registry.
//!
//! The registry is the in-memory [`SymbolSource`]: a list of entries, each a
//! name, an optional documentation string and a visibility marker. Entries
//! keep their registration order, which is the enumeration order the catalog
//! sees.
//!
//! # Examples
//!
//! ```
//! use refdoc_catalog::{Registry, SymbolEntry, SymbolSource};
//! use refdoc_core::{SymbolName, Visibility};
//!
//! let registry = Registry::builder("webgestalt")
//!     .documented("ora", "# ORA\nOver-representation analysis")
//!     .undocumented("meta_ora")
//!     .entry(SymbolEntry::documented("helper", "x").with_visibility(Visibility::Internal))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 3);
//! let doc = registry.documentation(&SymbolName::new("meta_ora")).unwrap();
//! assert!(doc.is_none());
//! ```

use crate::source::{SymbolListing, SymbolSource};
use refdoc_core::{Error, Result, SymbolName, Visibility};
use serde::Serialize;
use std::collections::HashMap;

/// One registered symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    /// Unique symbol name
    pub name: SymbolName,
    /// Raw documentation text, if any
    pub doc: Option<String>,
    /// Visibility marker
    pub visibility: Visibility,
}

impl SymbolEntry {
    /// Creates an entry. Visibility defaults from the name shape.
    #[must_use]
    pub fn new(name: impl Into<SymbolName>, doc: Option<String>) -> Self {
        let name = name.into();
        let visibility = Visibility::default_for(&name);
        Self {
            name,
            doc,
            visibility,
        }
    }

    /// Creates an entry with documentation.
    #[must_use]
    pub fn documented(name: impl Into<SymbolName>, doc: impl Into<String>) -> Self {
        Self::new(name, Some(doc.into()))
    }

    /// Creates an entry without documentation.
    #[must_use]
    pub fn undocumented(name: impl Into<SymbolName>) -> Self {
        Self::new(name, None)
    }

    /// Overrides the visibility marker.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// In-memory symbol source.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    label: String,
    entries: Vec<SymbolEntry>,
    positions: HashMap<SymbolName, usize>,
}

impl Registry {
    /// Starts building a registry with the given label.
    #[must_use]
    pub fn builder(label: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder::new(label)
    }

    /// Number of registered symbols (all visibilities).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.positions
            .get(&SymbolName::new(name))
            .map(|&i| &self.entries[i])
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }
}

impl SymbolSource for Registry {
    fn label(&self) -> &str {
        &self.label
    }

    fn list(&self) -> Result<Vec<SymbolListing>> {
        Ok(self
            .entries
            .iter()
            .map(|e| SymbolListing::new(e.name.clone(), e.visibility))
            .collect())
    }

    fn documentation(&self, name: &SymbolName) -> Result<Option<String>> {
        let index = self
            .positions
            .get(name)
            .ok_or_else(|| Error::DocumentationLookup {
                symbol: name.to_string(),
                source: format!("symbol is not registered in '{}'", self.label).into(),
            })?;
        Ok(self.entries[*index].doc.clone())
    }
}

/// Builder for [`Registry`].
///
/// Duplicate names are rejected by [`RegistryBuilder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    label: String,
    entries: Vec<SymbolEntry>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Registers an entry.
    #[must_use]
    pub fn entry(mut self, entry: SymbolEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Registers a documented symbol.
    #[must_use]
    pub fn documented(self, name: impl Into<SymbolName>, doc: impl Into<String>) -> Self {
        self.entry(SymbolEntry::documented(name, doc))
    }

    /// Registers a symbol without documentation.
    #[must_use]
    pub fn undocumented(self, name: impl Into<SymbolName>) -> Self {
        self.entry(SymbolEntry::undocumented(name))
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSymbol`] for the first name registered twice.
    pub fn build(self) -> Result<Registry> {
        let mut positions = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if positions.insert(entry.name.clone(), i).is_some() {
                return Err(Error::DuplicateSymbol {
                    symbol: entry.name.to_string(),
                });
            }
        }

        tracing::debug!(
            "Built registry '{}' with {} symbols",
            self.label,
            self.entries.len()
        );

        Ok(Registry {
            label: self.label,
            entries: self.entries,
            positions,
        })
    }
}
