//! The symbol source seam.
//!
//! A [`SymbolSource`] is whatever exposes the documented symbols: it lists
//! names, and for a given name yields an optional documentation string.
//! Nothing else about the symbols is visible to the generator.

use refdoc_core::{Result, SymbolName, Visibility};
use serde::Serialize;

/// One listed symbol: its name and visibility marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolListing {
    /// Symbol name
    pub name: SymbolName,
    /// Visibility decided by whoever registered the symbol
    pub visibility: Visibility,
}

impl SymbolListing {
    /// Creates a listing.
    #[must_use]
    pub fn new(name: impl Into<SymbolName>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
        }
    }
}

/// Provider of named, optionally documented symbols.
///
/// # Examples
///
/// ```
/// use refdoc_catalog::{SymbolListing, SymbolSource};
/// use refdoc_core::{Result, SymbolName, Visibility};
///
/// #[derive(Debug)]
/// struct Single;
///
/// impl SymbolSource for Single {
///     fn label(&self) -> &str {
///         "single"
///     }
///
///     fn list(&self) -> Result<Vec<SymbolListing>> {
///         Ok(vec![SymbolListing::new("ora", Visibility::Public)])
///     }
///
///     fn documentation(&self, _name: &SymbolName) -> Result<Option<String>> {
///         Ok(Some("Over-representation analysis".to_string()))
///     }
/// }
///
/// let source = Single;
/// assert_eq!(source.list().unwrap().len(), 1);
/// ```
pub trait SymbolSource: Send + Sync {
    /// Human-readable name of the source, used in error messages.
    fn label(&self) -> &str;

    /// Lists every exposed symbol in the source's enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be enumerated. A generation
    /// run treats this as fatal.
    fn list(&self) -> Result<Vec<SymbolListing>>;

    /// Returns the documentation of `name`, or `None` if it has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails (as opposed to the
    /// symbol simply being undocumented).
    fn documentation(&self, name: &SymbolName) -> Result<Option<String>>;
}
