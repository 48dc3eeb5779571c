//! Core types, configuration, and errors for refdoc.
//!
//! This crate provides the foundational types used across all other crates
//! in the refdoc workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`SymbolName`, `Visibility`)
//! - Error hierarchy with the offending symbol or path attached
//! - Generator configuration (`GeneratorConfig`, `MissingDocPolicy`)
//! - CLI support types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{DEFAULT_OUTPUT_DIR, GeneratorConfig, IndexSettings, MissingDocPolicy};
pub use error::{Error, Result};
pub use types::{SymbolName, Visibility};
