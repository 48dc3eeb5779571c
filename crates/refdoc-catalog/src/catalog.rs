//! Filtered symbol catalog.
//!
//! The catalog is the list of names a generation run considers: everything
//! the source lists, minus internal symbols, minus the skip set. Enumeration
//! order of the source is preserved.
//!
//! # Examples
//!
//! ```
//! use refdoc_catalog::{Registry, SymbolCatalog};
//! use std::collections::BTreeSet;
//!
//! let registry = Registry::builder("demo")
//!     .documented("ora", "a")
//!     .documented("__hidden", "b")
//!     .documented("webgestaltpy", "c")
//!     .build()
//!     .unwrap();
//!
//! let skip: BTreeSet<String> = ["webgestaltpy".to_string()].into();
//! let names = SymbolCatalog::new(&registry, &skip).list_symbols().unwrap();
//!
//! assert_eq!(names.len(), 1);
//! assert_eq!(names[0].as_str(), "ora");
//! ```

use crate::source::SymbolSource;
use refdoc_core::{Result, SymbolName};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Why a listed symbol was left out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionReason {
    /// Marked internal by its registrant
    Internal,
    /// Named in the skip set
    Skipped,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

/// A symbol left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    /// Symbol name
    pub name: SymbolName,
    /// Reason for exclusion
    pub reason: ExclusionReason,
}

/// Result of scanning a source: kept names and excluded ones, both in
/// enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogScan {
    /// Names kept for generation
    pub symbols: Vec<SymbolName>,
    /// Names dropped, with reasons
    pub excluded: Vec<Exclusion>,
}

impl CatalogScan {
    /// Returns `true` if `name` was kept.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s.as_str() == name)
    }
}

/// Catalog view over a symbol source.
#[derive(Debug)]
pub struct SymbolCatalog<'a, S: ?Sized> {
    source: &'a S,
    skip: &'a BTreeSet<String>,
}

impl<'a, S: SymbolSource + ?Sized> SymbolCatalog<'a, S> {
    /// Creates a catalog over `source` with the given skip set.
    #[must_use]
    pub const fn new(source: &'a S, skip: &'a BTreeSet<String>) -> Self {
        Self { source, skip }
    }

    /// Lists and classifies every symbol of the source.
    ///
    /// Internal symbols are dropped first, then skip-set names.
    ///
    /// # Errors
    ///
    /// Propagates the source's listing error unchanged; there is no
    /// partial-catalog fallback.
    pub fn scan(&self) -> Result<CatalogScan> {
        let listings = self.source.list()?;
        let mut scan = CatalogScan::default();

        for listing in listings {
            let reason = if !listing.visibility.is_public() {
                Some(ExclusionReason::Internal)
            } else if self.skip.contains(listing.name.as_str()) {
                Some(ExclusionReason::Skipped)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    tracing::debug!("Excluding {} ({reason})", listing.name);
                    scan.excluded.push(Exclusion {
                        name: listing.name,
                        reason,
                    });
                }
                None => scan.symbols.push(listing.name),
            }
        }

        tracing::debug!(
            "Catalog of '{}': {} kept, {} excluded",
            self.source.label(),
            scan.symbols.len(),
            scan.excluded.len()
        );

        Ok(scan)
    }

    /// Lists the kept symbol names in enumeration order.
    ///
    /// # Errors
    ///
    /// Same as [`SymbolCatalog::scan`].
    pub fn list_symbols(&self) -> Result<Vec<SymbolName>> {
        Ok(self.scan()?.symbols)
    }
}
