//! Strong domain types for refdoc.
//!
//! # Examples
//!
//! ```
//! use refdoc_core::{SymbolName, Visibility};
//!
//! let name = SymbolName::new("ora_from_files");
//! assert_eq!(name.as_str(), "ora_from_files");
//! assert_eq!(Visibility::default_for(&name), Visibility::Public);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a documentable symbol (newtype over String).
///
/// Names are unique within a registry. Any string is accepted; turning a
/// name into a file base-name is the sanitizer's job, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolName(String);

impl SymbolName {
    /// Creates a new symbol name.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_core::SymbolName;
    ///
    /// let name = SymbolName::new("NTAMethod");
    /// assert_eq!(name, SymbolName::from("NTAMethod"));
    /// ```
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SymbolName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if the name follows the reserved internal naming
    /// convention (a leading double underscore).
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_core::SymbolName;
    ///
    /// assert!(SymbolName::new("__doc__").is_reserved());
    /// assert!(SymbolName::new("__hidden").is_reserved());
    /// assert!(!SymbolName::new("_private").is_reserved());
    /// ```
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0.starts_with("__")
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SymbolName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SymbolName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Visibility marker carried by every registered symbol.
///
/// `Internal` symbols are never listed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Documented in the generated reference
    #[default]
    Public,
    /// Hidden from the generated reference
    Internal,
}

impl Visibility {
    /// Visibility used when the registrant did not state one.
    ///
    /// Reserved names default to `Internal`, everything else to `Public`.
    #[must_use]
    pub fn default_for(name: &SymbolName) -> Self {
        if name.is_reserved() {
            Self::Internal
        } else {
            Self::Public
        }
    }

    /// Returns `true` for `Visibility::Public`.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Internal => f.write_str("internal"),
        }
    }
}
