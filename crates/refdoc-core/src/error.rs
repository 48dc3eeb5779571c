//! Error types for refdoc.
//!
//! A single error hierarchy shared by every library crate in the workspace.
//! Variants carry the symbol name or path they concern so that a fatal
//! condition can always be reported against the offending input.
//!
//! # Examples
//!
//! ```
//! use refdoc_core::{Error, Result};
//!
//! fn require_docs(symbol: &str, doc: Option<&str>) -> Result<()> {
//!     if doc.is_none() {
//!         return Err(Error::MissingDocumentation {
//!             symbol: symbol.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_docs("ora", None).unwrap_err();
//! assert!(err.is_missing_documentation());
//! assert_eq!(err.symbol(), Some("ora"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for refdoc.
#[derive(Error, Debug)]
pub enum Error {
    /// The symbol source could not be listed.
    ///
    /// Fatal for a generation run: there is no partial-catalog fallback.
    #[error("Symbol source unavailable: {source_name}")]
    SourceUnavailable {
        /// Name of the source (registry label or manifest path)
        source_name: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Looking up the documentation of one symbol failed.
    #[error("Documentation lookup failed for symbol '{symbol}'")]
    DocumentationLookup {
        /// Symbol whose documentation could not be read
        symbol: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A symbol has no documentation and the run is configured to fail.
    #[error("Symbol '{symbol}' has no documentation")]
    MissingDocumentation {
        /// Symbol without documentation
        symbol: String,
    },

    /// The same symbol name was registered twice.
    #[error("Duplicate symbol: {symbol}")]
    DuplicateSymbol {
        /// Name registered more than once
        symbol: String,
    },

    /// Configuration error.
    ///
    /// Raised when a configuration file cannot be read or parsed, or holds
    /// contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// File system error while writing generated output.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Template name
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Validation error for domain types.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if the symbol source could not be listed.
    #[must_use]
    pub const fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Returns `true` if this is a missing documentation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_core::Error;
    ///
    /// let err = Error::MissingDocumentation {
    ///     symbol: "gsea".to_string(),
    /// };
    /// assert!(err.is_missing_documentation());
    /// ```
    #[must_use]
    pub const fn is_missing_documentation(&self) -> bool {
        matches!(self, Self::MissingDocumentation { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns the symbol name this error concerns, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_core::Error;
    ///
    /// let err = Error::DuplicateSymbol {
    ///     symbol: "nta".to_string(),
    /// };
    /// assert_eq!(err.symbol(), Some("nta"));
    ///
    /// let err = Error::InvalidArgument("bad".to_string());
    /// assert_eq!(err.symbol(), None);
    /// ```
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::DocumentationLookup { symbol, .. }
            | Self::MissingDocumentation { symbol }
            | Self::DuplicateSymbol { symbol } => Some(symbol),
            _ => None,
        }
    }
}

/// Result type alias for refdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
