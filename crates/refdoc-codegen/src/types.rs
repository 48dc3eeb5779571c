//! Records produced by a generation run.

use refdoc_catalog::Exclusion;
use refdoc_core::SymbolName;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A page that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Original symbol name (the page title and link text)
    pub name: SymbolName,
    /// Sanitized file name, relative to the output directory
    pub file_name: String,
    /// Full path written
    pub path: PathBuf,
}

impl PageRecord {
    /// Index line linking to this page, newline included.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdoc_codegen::PageRecord;
    /// use refdoc_core::SymbolName;
    ///
    /// let record = PageRecord {
    ///     name: SymbolName::new("meta_ora"),
    ///     file_name: "meta_ora.md".to_string(),
    ///     path: "docs/reference/meta_ora.md".into(),
    /// };
    /// assert_eq!(record.link_line(), "- [meta_ora](./meta_ora.md)\n");
    /// ```
    #[must_use]
    pub fn link_line(&self) -> String {
        format!("- [{}](./{})\n", self.name, self.file_name)
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Label of the symbol source
    pub source: String,
    /// Output directory
    pub output_dir: PathBuf,
    /// Path of the written index page
    pub index_path: PathBuf,
    /// Pages written, in index order
    pub pages: Vec<PageRecord>,
    /// Catalog symbols skipped for lack of documentation, in emission order
    pub undocumented: Vec<SymbolName>,
    /// Symbols left out of the catalog
    pub excluded: Vec<Exclusion>,
}

impl GenerationReport {
    /// Number of pages written.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// File names written by more than one symbol, with the symbols that
    /// wrote them in write order. The last symbol's page is the one on disk.
    #[must_use]
    pub fn collisions(&self) -> BTreeMap<&str, Vec<&SymbolName>> {
        let mut by_file: BTreeMap<&str, Vec<&SymbolName>> = BTreeMap::new();
        for page in &self.pages {
            by_file
                .entry(page.file_name.as_str())
                .or_default()
                .push(&page.name);
        }
        by_file.retain(|_, names| names.len() > 1);
        by_file
    }
}
