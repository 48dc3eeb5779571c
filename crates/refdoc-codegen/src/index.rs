//! Index building: the driver of a generation run.
//!
//! The index builder takes the filtered catalog, puts the priority names
//! first (in priority order) followed by the rest of the catalog (in
//! enumeration order), writes one page per symbol, and finally writes
//! `index.md` linking to every page that was actually written, in that same
//! order.
//!
//! # Examples
//!
//! ```
//! use refdoc_catalog::Registry;
//! use refdoc_codegen::build_index;
//! use refdoc_core::GeneratorConfig;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let registry = Registry::builder("demo")
//!     .documented("ora", "# ORA\nOver-representation analysis")
//!     .documented("gsea", "Gene set enrichment analysis")
//!     .build()
//!     .unwrap();
//!
//! let config = GeneratorConfig::new()
//!     .with_output_dir(temp.path().join("reference"))
//!     .with_priority(["gsea"]);
//!
//! let report = build_index(&registry, &config).unwrap();
//! let order: Vec<_> = report.pages.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(order, vec!["gsea", "ora"]);
//! ```

use crate::output::{OutputWriter, WriteOptions};
use crate::page::PageWriter;
use crate::template_engine::INDEX_TEMPLATE;
use crate::types::{GenerationReport, PageRecord};
use refdoc_catalog::{SymbolCatalog, SymbolSource};
use refdoc_core::{Error, GeneratorConfig, Result, SymbolName};
use serde::Serialize;
use std::collections::HashSet;

/// File name of the index page.
pub const INDEX_FILE: &str = "index.md";

#[derive(Debug, Serialize)]
struct IndexContext<'a> {
    title: &'a str,
    description: &'a str,
    section: &'a str,
    links: String,
}

/// Orders a catalog for emission.
///
/// Priority names present in `catalog` come first, in priority order; every
/// other catalog name follows in catalog order. Priority names missing from
/// the catalog are ignored, and a name listed twice in `priority` is
/// emitted once.
///
/// # Examples
///
/// ```
/// use refdoc_codegen::index::order_symbols;
/// use refdoc_core::SymbolName;
///
/// let catalog: Vec<SymbolName> = ["a", "b", "c"].into_iter().map(SymbolName::from).collect();
/// let priority = vec!["c".to_string(), "a".to_string()];
///
/// let ordered = order_symbols(&catalog, &priority);
/// let names: Vec<_> = ordered.iter().map(SymbolName::as_str).collect();
/// assert_eq!(names, vec!["c", "a", "b"]);
/// ```
#[must_use]
pub fn order_symbols(catalog: &[SymbolName], priority: &[String]) -> Vec<SymbolName> {
    let in_catalog: HashSet<&str> = catalog.iter().map(SymbolName::as_str).collect();
    let mut emitted: HashSet<&str> = HashSet::with_capacity(catalog.len());
    let mut ordered = Vec::with_capacity(catalog.len());

    for name in priority {
        if in_catalog.contains(name.as_str()) && emitted.insert(name.as_str()) {
            ordered.push(SymbolName::new(name.as_str()));
        }
    }

    for name in catalog {
        if emitted.insert(name.as_str()) {
            ordered.push(name.clone());
        }
    }

    ordered
}

/// Drives a full generation run against one configuration.
#[derive(Debug)]
pub struct IndexBuilder<'c> {
    config: &'c GeneratorConfig,
    pages: PageWriter,
}

impl<'c> IndexBuilder<'c> {
    /// Creates a builder with the built-in templates, writing into
    /// `config.output_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(config: &'c GeneratorConfig) -> Result<Self> {
        let options = WriteOptions::new().with_atomic_writes(config.atomic_writes);
        let output = OutputWriter::new(&config.output_dir, options);
        let pages = PageWriter::new(output, config.missing_docs)?;
        Ok(Self::with_page_writer(config, pages))
    }

    /// Creates a builder around an existing page writer (for custom
    /// templates). The page writer's output directory receives the index.
    #[must_use]
    pub const fn with_page_writer(config: &'c GeneratorConfig, pages: PageWriter) -> Self {
        Self { config, pages }
    }

    /// Runs the generation: catalog, pages, index.
    ///
    /// Progress is logged per symbol. Pages written before a fatal error
    /// stay on disk.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The source cannot be listed
    /// - A documentation lookup fails (the error names the symbol)
    /// - A symbol is undocumented under the `fail` policy
    /// - Rendering or writing a file fails
    pub fn build<S: SymbolSource + ?Sized>(&self, source: &S) -> Result<GenerationReport> {
        tracing::info!(
            "Generating reference for '{}' into {}",
            source.label(),
            self.pages.output().dir().display()
        );

        let scan = SymbolCatalog::new(source, &self.config.skip).scan()?;
        let ordered = order_symbols(&scan.symbols, &self.config.priority);

        let outcomes = self.emit_pages(source, &ordered)?;

        let mut pages = Vec::with_capacity(outcomes.len());
        let mut undocumented = Vec::new();
        for (name, outcome) in ordered.into_iter().zip(outcomes) {
            match outcome {
                Some(record) => pages.push(record),
                None => undocumented.push(name),
            }
        }

        let content = self.render_index(&pages)?;
        let index_path = self.pages.output().write(INDEX_FILE, &content)?;

        let report = GenerationReport {
            source: source.label().to_string(),
            output_dir: self.pages.output().dir().to_path_buf(),
            index_path,
            pages,
            undocumented,
            excluded: scan.excluded,
        };

        for (file_name, names) in report.collisions() {
            tracing::warn!(
                "{} symbols share {file_name}; the page of '{}' was kept",
                names.len(),
                names.last().map_or("", |n| n.as_str())
            );
        }

        tracing::info!(
            "Wrote {} pages and {}",
            report.page_count(),
            report.index_path.display()
        );

        Ok(report)
    }

    /// Renders the index page for `pages` without writing it.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_index(&self, pages: &[PageRecord]) -> Result<String> {
        let context = IndexContext {
            title: &self.config.index.title,
            description: &self.config.index.description,
            section: &self.config.index.section,
            links: pages.iter().map(PageRecord::link_line).collect(),
        };
        self.pages.engine().render(INDEX_TEMPLATE, &context)
    }

    #[cfg(not(feature = "parallel"))]
    fn emit_pages<S: SymbolSource + ?Sized>(
        &self,
        source: &S,
        ordered: &[SymbolName],
    ) -> Result<Vec<Option<PageRecord>>> {
        ordered
            .iter()
            .map(|name| self.emit_page(source, name))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn emit_pages<S: SymbolSource + ?Sized>(
        &self,
        source: &S,
        ordered: &[SymbolName],
    ) -> Result<Vec<Option<PageRecord>>> {
        use rayon::prelude::*;

        // Collect keeps input order, so the index never depends on completion order.
        ordered
            .par_iter()
            .map(|name| self.emit_page(source, name))
            .collect()
    }

    fn emit_page<S: SymbolSource + ?Sized>(
        &self,
        source: &S,
        name: &SymbolName,
    ) -> Result<Option<PageRecord>> {
        tracing::info!("Processing {name}");

        let doc = source.documentation(name).map_err(|e| {
            if e.symbol().is_some() {
                e
            } else {
                Error::DocumentationLookup {
                    symbol: name.to_string(),
                    source: Box::new(e),
                }
            }
        })?;

        self.pages.write_page(name, doc.as_deref())
    }
}

/// Generates all pages and the index for `source` using `config`.
///
/// # Errors
///
/// See [`IndexBuilder::build`].
pub fn build_index<S: SymbolSource + ?Sized>(
    source: &S,
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    IndexBuilder::new(config)?.build(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdoc_catalog::Registry;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<SymbolName> {
        list.iter().map(|s| SymbolName::new(*s)).collect()
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn as_strs(list: &[SymbolName]) -> Vec<&str> {
        list.iter().map(SymbolName::as_str).collect()
    }

    #[test]
    fn test_order_priority_first() {
        let ordered = order_symbols(&names(&["a", "b", "c"]), &strings(&["c", "a"]));
        assert_eq!(as_strs(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_order_ignores_absent_priority() {
        let ordered = order_symbols(&names(&["a", "b"]), &strings(&["zzz", "b"]));
        assert_eq!(as_strs(&ordered), vec!["b", "a"]);
    }

    #[test]
    fn test_order_duplicate_priority_emitted_once() {
        let ordered = order_symbols(&names(&["a", "b"]), &strings(&["b", "b"]));
        assert_eq!(as_strs(&ordered), vec!["b", "a"]);
    }

    #[test]
    fn test_order_without_priority_is_catalog_order() {
        let ordered = order_symbols(&names(&["z", "y", "x"]), &[]);
        assert_eq!(as_strs(&ordered), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_render_index_without_pages() {
        let config = GeneratorConfig::new();
        let builder = IndexBuilder::new(&config).unwrap();
        let index = builder.render_index(&[]).unwrap();
        assert_eq!(
            index,
            format!(
                "# Reference\n\n{}\n\n## Functions\n\n",
                config.index.description
            )
        );
    }

    #[test]
    fn test_build_writes_index_in_emission_order() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::builder("r")
            .documented("a", "A")
            .documented("b", "B")
            .documented("c", "C")
            .build()
            .unwrap();
        let config = GeneratorConfig::new()
            .with_output_dir(temp.path())
            .with_priority(["c", "a"]);

        let report = build_index(&registry, &config).unwrap();

        let index = std::fs::read_to_string(&report.index_path).unwrap();
        assert!(index.ends_with("- [c](./c.md)\n- [a](./a.md)\n- [b](./b.md)\n"));
        assert_eq!(report.index_path, temp.path().join(INDEX_FILE));
    }
}
