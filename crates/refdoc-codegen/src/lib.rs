//! Markdown reference generation for refdoc.
//!
//! Turns the filtered symbol catalog into one Markdown page per documented
//! symbol plus an `index.md` linking to them.
//!
//! # Architecture
//!
//! ```text
//! SymbolSource → SymbolCatalog → order_symbols → PageWriter → index.md
//!                 (filter)        (priority)      (render + write)
//! ```
//!
//! # Feature Flags
//!
//! - `parallel`: render and write pages on the rayon thread pool. Index
//!   order is unaffected.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod index;
pub mod markdown;
pub mod output;
pub mod page;
pub mod sanitize;
pub mod template_engine;
pub mod types;

pub use index::{INDEX_FILE, IndexBuilder, build_index, order_symbols};
pub use markdown::normalize_headings;
pub use output::{OutputWriter, WriteOptions};
pub use page::PageWriter;
pub use sanitize::{page_file_name, sanitize};
pub use template_engine::TemplateEngine;
pub use types::{GenerationReport, PageRecord};
