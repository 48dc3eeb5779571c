//! refdoc CLI library.
//!
//! Exposes the argument definitions, commands and formatters behind the
//! `refdoc` binary so they can be tested.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;
