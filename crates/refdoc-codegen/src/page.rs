//! Per-symbol page rendering and persistence.
//!
//! A page is a level-1 title holding the symbol name in inline code, a blank
//! line, the heading-demoted documentation, and a trailing blank line:
//!
//! ```text
//! # `ora`
//!
//! ## Parameters
//! ...
//!
//! ```

use crate::markdown::normalize_headings;
use crate::output::OutputWriter;
use crate::sanitize::page_file_name;
use crate::template_engine::{PAGE_TEMPLATE, TemplateEngine};
use crate::types::PageRecord;
use refdoc_core::{Error, MissingDocPolicy, Result, SymbolName};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    name: &'a str,
    body: String,
}

/// Renders symbol pages and writes them to the output directory.
#[derive(Debug)]
pub struct PageWriter {
    engine: TemplateEngine<'static>,
    output: OutputWriter,
    policy: MissingDocPolicy,
}

impl PageWriter {
    /// Creates a page writer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(output: OutputWriter, policy: MissingDocPolicy) -> Result<Self> {
        Ok(Self::with_engine(TemplateEngine::new()?, output, policy))
    }

    /// Creates a page writer with a caller-supplied template engine.
    #[must_use]
    pub fn with_engine(
        engine: TemplateEngine<'static>,
        output: OutputWriter,
        policy: MissingDocPolicy,
    ) -> Self {
        Self {
            engine,
            output,
            policy,
        }
    }

    /// The template engine used for pages (and the index).
    #[must_use]
    pub const fn engine(&self) -> &TemplateEngine<'static> {
        &self.engine
    }

    /// The output writer.
    #[must_use]
    pub const fn output(&self) -> &OutputWriter {
        &self.output
    }

    /// Renders the page text for `name` without writing it.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render(&self, name: &SymbolName, doc: &str) -> Result<String> {
        let context = PageContext {
            name: name.as_str(),
            body: normalize_headings(doc),
        };
        self.engine.render(PAGE_TEMPLATE, &context)
    }

    /// Writes the page for `name`.
    ///
    /// Returns the record of the written page, or `None` when `doc` is
    /// absent and the policy is [`MissingDocPolicy::Skip`]. The output
    /// directory is created if missing; an existing page is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDocumentation`] when `doc` is absent and the
    /// policy is [`MissingDocPolicy::Fail`], and rendering or I/O errors
    /// otherwise.
    pub fn write_page(&self, name: &SymbolName, doc: Option<&str>) -> Result<Option<PageRecord>> {
        let Some(doc) = doc else {
            return match self.policy {
                MissingDocPolicy::Skip => {
                    tracing::debug!("No documentation for {name}, skipping");
                    Ok(None)
                }
                MissingDocPolicy::Fail => Err(Error::MissingDocumentation {
                    symbol: name.to_string(),
                }),
            };
        };

        let content = self.render(name, doc)?;
        let file_name = page_file_name(name.as_str());
        let path = self.output.write(&file_name, &content)?;

        Ok(Some(PageRecord {
            name: name.clone(),
            file_name,
            path,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::WriteOptions;
    use std::fs;
    use tempfile::TempDir;

    fn writer(temp: &TempDir, policy: MissingDocPolicy) -> PageWriter {
        let output = OutputWriter::new(temp.path().join("reference"), WriteOptions::default());
        PageWriter::new(output, policy).unwrap()
    }

    #[test]
    fn test_page_layout() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Skip);

        let record = pages
            .write_page(&SymbolName::new("ora"), Some("# ORA\nRuns   ORA."))
            .unwrap()
            .unwrap();

        assert_eq!(record.file_name, "ora.md");
        assert_eq!(
            fs::read_to_string(&record.path).unwrap(),
            "# `ora`\n\n## ORA\nRuns ORA.\n\n"
        );
    }

    #[test]
    fn test_title_uses_original_name() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Skip);

        let record = pages
            .write_page(&SymbolName::new("Func:Name!"), Some("body"))
            .unwrap()
            .unwrap();

        assert_eq!(record.file_name, "FuncName.md");
        let content = fs::read_to_string(&record.path).unwrap();
        assert!(content.starts_with("# `Func:Name!`\n"));
    }

    #[test]
    fn test_missing_doc_skipped() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Skip);

        let record = pages.write_page(&SymbolName::new("nta"), None).unwrap();

        assert!(record.is_none());
        assert!(!temp.path().join("reference/nta.md").exists());
    }

    #[test]
    fn test_missing_doc_fails_under_fail_policy() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Fail);

        let err = pages.write_page(&SymbolName::new("nta"), None).unwrap_err();

        assert!(err.is_missing_documentation());
        assert_eq!(err.symbol(), Some("nta"));
    }

    #[test]
    fn test_empty_doc_still_written() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Skip);

        let record = pages
            .write_page(&SymbolName::new("gsea"), Some(""))
            .unwrap()
            .unwrap();
        assert_eq!(fs::read_to_string(record.path).unwrap(), "# `gsea`\n\n\n\n");
    }

    #[test]
    fn test_render_does_not_write() {
        let temp = TempDir::new().unwrap();
        let pages = writer(&temp, MissingDocPolicy::Skip);

        let text = pages.render(&SymbolName::new("a"), "### x").unwrap();
        assert_eq!(text, "# `a`\n\n#### x\n\n");
        assert!(!pages.output().dir().exists());
    }
}
