//! Command implementations for the refdoc CLI.
//!
//! Each command module loads its inputs, runs the operation, and formats
//! output according to the requested format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod list;
