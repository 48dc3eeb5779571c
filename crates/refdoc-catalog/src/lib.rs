//! Symbol sources and catalog filtering for refdoc.
//!
//! Declares the [`SymbolSource`] seam, the in-memory [`Registry`] that
//! implements it, JSON manifests that populate a registry from disk, and the
//! [`SymbolCatalog`] that applies the exclusion policy.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod catalog;
pub mod manifest;
pub mod registry;
pub mod source;

pub use catalog::{CatalogScan, Exclusion, ExclusionReason, SymbolCatalog};
pub use manifest::{Manifest, ManifestEntry};
pub use registry::{Registry, RegistryBuilder, SymbolEntry};
pub use source::{SymbolListing, SymbolSource};
